//! Error taxonomy for service operations.
//!
//! Three terminal failure classes cover every operation: invalid input,
//! missing record, and a conflicting record or dependent. HTTP status
//! mapping lives in the web crate.

use thiserror::Error;

/// Failure of a service operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or invalid required fields, or an unresolvable type id.
    #[error("{0}")]
    Validation(String),

    /// No record matched the requested id.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The operation is blocked by an existing record or dependent.
    #[error("{0}")]
    Conflict(String),
}

impl ServiceError {
    /// Validation failure with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Conflict failure with the given message.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(ServiceError::NotFound("Area").to_string(), "Area not found");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = ServiceError::validation("Invalid event type");
        assert_eq!(err.to_string(), "Invalid event type");
    }
}
