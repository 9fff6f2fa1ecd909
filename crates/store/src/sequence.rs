//! Per-kind identifier sequences.

use crate::error::{StoreError, StoreResult};

/// Monotonic counter backing `<prefix><n>` identifiers for one record kind.
///
/// Allocation happens under the store's write lock, so two records of the same
/// kind can never receive the same number. `next` is `None` once `u64::MAX`
/// has been handed out or restored; further allocations fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<u64>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence number for records of `kind`.
    pub fn allocate(&mut self, kind: &'static str) -> StoreResult<u64> {
        let n = self.next.ok_or(StoreError::IdSpaceExhausted { kind })?;
        self.next = n.checked_add(1);
        Ok(n)
    }

    /// Move past a number that is already in use (restored records).
    pub fn observe(&mut self, used: Option<u64>) {
        if let (Some(n), Some(next)) = (used, self.next) {
            if n >= next {
                self.next = n.checked_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_increasing_numbers() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.allocate("tile"), Ok(1));
        assert_eq!(seq.allocate("tile"), Ok(2));
        assert_eq!(seq.allocate("tile"), Ok(3));
    }

    #[test]
    fn observe_skips_past_used_numbers_only() {
        let mut seq = IdSequence::new();
        seq.observe(Some(7));
        assert_eq!(seq.allocate("sale"), Ok(8));
        seq.observe(Some(3));
        seq.observe(None);
        assert_eq!(seq.allocate("sale"), Ok(9));
    }

    #[test]
    fn last_number_is_handed_out_once() {
        let mut seq = IdSequence::new();
        seq.observe(Some(u64::MAX - 1));
        assert_eq!(seq.allocate("tile"), Ok(u64::MAX));
        assert_eq!(
            seq.allocate("tile"),
            Err(StoreError::IdSpaceExhausted { kind: "tile" })
        );
        assert_eq!(
            seq.allocate("tile"),
            Err(StoreError::IdSpaceExhausted { kind: "tile" })
        );
    }

    #[test]
    fn restoring_the_maximum_exhausts_the_sequence() {
        let mut seq = IdSequence::new();
        seq.observe(Some(u64::MAX));
        seq.observe(Some(5));
        assert!(seq.allocate("purchase").is_err());
    }
}
