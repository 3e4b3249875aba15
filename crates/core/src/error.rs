//! Domain error model.

use thiserror::Error;

use crate::id::CardNumber;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the caller decides whether to display it,
/// re-prompt, or give up. Nothing in the domain layer logs or retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value broke its rule. Carries the rule in human-readable form.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced card does not exist.
    #[error("card {0} not found")]
    NotFound(CardNumber),

    /// A status precondition was not met (e.g. write-off of an unregistered card).
    #[error("policy violation: {0}")]
    Policy(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn policy(msg: impl Into<String>) -> Self {
        Self::Policy(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(number: CardNumber) -> Self {
        Self::NotFound(number)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_policy(&self) -> bool {
        matches!(self, Self::Policy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::validation("quantity cannot be negative");
        assert_eq!(err.to_string(), "validation failed: quantity cannot be negative");

        let err = DomainError::not_found(CardNumber::new(7));
        assert_eq!(err.to_string(), "card 7 not found");
        assert!(err.is_not_found());
    }
}
