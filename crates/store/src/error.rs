use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store failure.
///
/// Business-rule gaps (unknown tile references, oversell) are not errors.
/// Failures are an unusable store or a kind that has run out of ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store lock poisoned: {0}")]
    Poisoned(String),

    #[error("no {kind} ids left to allocate")]
    IdSpaceExhausted { kind: &'static str },
}
