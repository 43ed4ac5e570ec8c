//! Validation error types

use thiserror::Error;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty (or whitespace only)
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length in characters
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "email",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "email exceeds maximum length of 100 characters"
        );
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn empty_display() {
        let err = ValidationError::Empty { field: "role" };
        assert_eq!(err.to_string(), "role cannot be empty");
    }
}
