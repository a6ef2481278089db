//! Error types for comparisons.
//!
//! This module defines the errors produced by the coercion layer and the
//! comparison engine. Message wording is fixed; callers match on it.

use thiserror::Error;

use crate::{Category, Operator, Value};

/// A value could not be coerced into the category a comparison requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {} to type {category}", describe_kind(.kind))]
pub struct ConversionError {
    /// Category the value was coerced into
    pub category: Category,
    /// Type name of the rejected value
    pub kind: &'static str,
    /// Printable form of the rejected value
    pub value: String,
}

impl ConversionError {
    /// Creates a conversion error for `value`.
    pub fn new(category: Category, value: &Value) -> Self {
        let kind = if value.is_absent() {
            "nil"
        } else {
            value.type_name()
        };
        Self {
            category,
            kind,
            value: value.to_string(),
        }
    }
}

fn describe_kind(kind: &str) -> String {
    if kind == "nil" {
        kind.to_string()
    } else {
        format!("`{kind}`")
    }
}

/// Errors that can occur while comparing two values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Operator code outside the enumeration
    #[error("invalid comparison operator `{0}`")]
    InvalidOperator(i64),

    /// Operator text that names no operator
    #[error("unknown comparison operator `{0}`")]
    UnknownOperator(String),

    /// Term incompatible with the left operand's category
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Ordering operator applied to a structural value
    #[error("invalid operation `{op}` for values `{left}` and `{right}`")]
    UnsupportedOperator {
        op: Operator,
        left: String,
        right: String,
    },

    /// The values compared but the relation does not hold
    #[error("`{op}` comparison failed: `{left}` {phrase} `{right}`", phrase = .op.failure_phrase())]
    ComparisonFailed {
        op: Operator,
        left: String,
        right: String,
    },
}

impl CompareError {
    /// Creates a new unsupported operator error.
    pub fn unsupported(op: Operator, left: &Value, right: &Value) -> Self {
        Self::UnsupportedOperator {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Creates a new comparison failure.
    pub fn failed(op: Operator, left: &Value, right: &Value) -> Self {
        Self::ComparisonFailed {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Returns true if the values compared but the relation did not hold.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::ComparisonFailed { .. })
    }
}
