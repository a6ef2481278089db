//! Error types for validation units.

use check_core::{CompareError, Value, join_values};
use thiserror::Error;

use crate::FormatKind;

/// Message used when a required value is empty and no custom message is set.
pub const EMPTY_ARGUMENT: &str = "empty argument";

/// Errors that can occur while evaluating a validation unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Comparison failed or could not be performed
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Value matched none of the candidates
    #[error("`in` comparison failed: `{value}` not in `{candidates}`")]
    NotInSet { value: String, candidates: String },

    /// Value matched one of the excluded candidates
    #[error("`not in` comparison failed: `{value}` in `{candidates}`")]
    InSet {
        value: String,
        matched: String,
        candidates: String,
    },

    /// Required value is empty
    #[error("{message}")]
    Empty { message: String },

    /// Regular expression could not be compiled
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern { pattern: String, reason: String },

    /// Value does not match the regular expression
    #[error("`{value}` does not match pattern `{pattern}`")]
    PatternMismatch { value: String, pattern: String },

    /// Value is not a valid instance of a well-known format
    #[error("invalid {kind} `{value}`")]
    InvalidFormat { kind: FormatKind, value: String },

    /// Failure reported by a caller-supplied check
    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    /// Creates an empty argument error with the default message.
    pub fn empty() -> Self {
        Self::Empty {
            message: EMPTY_ARGUMENT.to_string(),
        }
    }

    /// Creates an empty argument error with a custom message.
    ///
    /// Blank messages fall back to the default one.
    pub fn empty_with(message: impl AsRef<str>) -> Self {
        match message.as_ref().trim() {
            "" => Self::empty(),
            message => Self::Empty {
                message: message.to_string(),
            },
        }
    }

    /// Creates a new "not in" error.
    pub fn not_in_set(value: &Value, candidates: &[Value]) -> Self {
        Self::NotInSet {
            value: value.to_string(),
            candidates: join_values(candidates),
        }
    }

    /// Creates a new "in" error.
    pub fn in_set(value: &Value, matched: &Value, candidates: &[Value]) -> Self {
        Self::InSet {
            value: value.to_string(),
            matched: matched.to_string(),
            candidates: join_values(candidates),
        }
    }

    /// Creates a new invalid format error.
    pub fn invalid_format(kind: FormatKind, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
        }
    }

    /// Creates a new custom error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messages() {
        assert_eq!(ValidationError::empty().to_string(), "empty argument");
        assert_eq!(
            ValidationError::empty_with("  name is required ").to_string(),
            "name is required"
        );
        assert_eq!(ValidationError::empty_with("   "), ValidationError::empty());
    }

    #[test]
    fn test_membership_messages() {
        let candidates = vec![Value::from("b"), Value::from("c"), Value::from("d")];
        let err = ValidationError::not_in_set(&Value::from("a"), &candidates);
        assert_eq!(err.to_string(), "`in` comparison failed: `a` not in `[b c d]`");

        let err = ValidationError::in_set(&Value::from("c"), &candidates[1], &candidates);
        assert_eq!(err.to_string(), "`not in` comparison failed: `c` in `[b c d]`");
    }

    #[test]
    fn test_format_message() {
        let err = ValidationError::invalid_format(FormatKind::Mac, "00:0a");
        assert_eq!(err.to_string(), "invalid mac address `00:0a`");
    }
}
