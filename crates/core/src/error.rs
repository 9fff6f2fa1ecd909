//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The record store itself is permissive; these errors are raised by draft
/// presence checks and value parsing at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or blank, or a quantity was not positive.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value could not be parsed (unit type, money amount).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Presence check shared by the draft validators.
pub fn require_present(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Positive-quantity check shared by the transaction draft validators.
pub fn require_positive(field: &str, value: i64) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{field} must be greater than zero")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail_presence_check() {
        assert!(require_present("name", "Marble").is_ok());
        assert_eq!(
            require_present("name", "   "),
            Err(DomainError::Validation("name is required".to_string()))
        );
    }

    #[test]
    fn zero_and_negative_quantities_fail_positive_check() {
        assert!(require_positive("quantity", 1).is_ok());
        assert!(require_positive("quantity", 0).is_err());
        assert!(require_positive("quantity", -5).is_err());
    }

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = DomainError::not_found("tile", "t9");
        assert_eq!(err.to_string(), "tile not found: t9");
    }
}
