//! Validation error types

use std::fmt;

/// Validation error for incoming record payloads
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field is absent from the payload
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field holds a JSON value of the wrong shape
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Payload itself could not be understood
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// An entry of a bulk payload failed validation
    Entry { index: usize, source: Box<ValidationError> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Entry { index, source } => write!(f, "entry {}: {}", index, source),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidType {
            field: "guest_count",
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "guest_count must be an integer");
    }

    #[test]
    fn entry_display_wraps_inner_error() {
        let err = ValidationError::Entry {
            index: 2,
            source: Box::new(ValidationError::Missing { field: "name" }),
        };
        assert_eq!(err.to_string(), "entry 2: name is required");
    }
}
