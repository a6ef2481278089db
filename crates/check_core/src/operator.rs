//! Comparison operators and value categories.

use std::fmt;
use std::str::FromStr;

use crate::{CompareError, Value};

/// A comparison operator.
///
/// The discriminants are the stable numeric codes accepted by
/// [`Operator::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal
    Eq = 1,
    /// Not equal
    Ne = 2,
    /// Less than
    Lt = 3,
    /// Less than or equal
    Lte = 4,
    /// Greater than
    Gt = 5,
    /// Greater than or equal
    Gte = 6,
}

impl Operator {
    /// Every operator, in code order.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
    ];

    /// Returns the short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
        }
    }

    /// Returns the numeric code of this operator.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns true for the four ordering operators.
    pub fn is_ordering(self) -> bool {
        !matches!(self, Operator::Eq | Operator::Ne)
    }

    /// Describes why a comparison with this operator failed.
    pub(crate) fn failure_phrase(self) -> &'static str {
        match self {
            Operator::Eq => "is not equal to",
            Operator::Ne => "is equal to",
            Operator::Lt => "is not less than",
            Operator::Lte => "is not less than or equal to",
            Operator::Gt => "is not greater than",
            Operator::Gte => "is not greater than or equal to",
        }
    }

    /// Applies the operator to two values of the same ordered type.
    pub fn holds<T: PartialOrd + ?Sized>(self, x: &T, term: &T) -> bool {
        match self {
            Operator::Eq => x == term,
            Operator::Ne => x != term,
            Operator::Lt => x < term,
            Operator::Lte => x <= term,
            Operator::Gt => x > term,
            Operator::Gte => x >= term,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Operator {
    type Error = CompareError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Operator::ALL
            .into_iter()
            .find(|op| op.code() == code)
            .ok_or(CompareError::InvalidOperator(code))
    }
}

impl FromStr for Operator {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eq" | "==" | "=" => Ok(Operator::Eq),
            "ne" | "!=" | "<>" => Ok(Operator::Ne),
            "lt" | "<" => Ok(Operator::Lt),
            "lte" | "le" | "<=" => Ok(Operator::Lte),
            "gt" | ">" => Ok(Operator::Gt),
            "gte" | "ge" | ">=" => Ok(Operator::Gte),
            _ => Err(CompareError::UnknownOperator(s.to_string())),
        }
    }
}

/// Comparison semantics class of a value.
///
/// Derived from the left operand of a comparison; the right operand is always
/// coerced into the left operand's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Signed integers, compared as `i64`
    SignedInteger,
    /// Unsigned integers, compared as `u64`
    UnsignedInteger,
    /// Floating point numbers, compared as `f64`
    Float,
    /// Strings, compared byte-lexically
    String,
    /// Timestamps, compared by instant
    Timestamp,
    /// Everything else; equality only
    Structural,
}

impl Category {
    /// Classifies a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Int(_) => Category::SignedInteger,
            Value::Uint(_) => Category::UnsignedInteger,
            Value::Float(_) => Category::Float,
            Value::String(_) => Category::String,
            Value::Timestamp(_) => Category::Timestamp,
            Value::Nil
            | Value::Bool(_)
            | Value::List(_)
            | Value::Map(_)
            | Value::Optional(_) => Category::Structural,
        }
    }

    /// Returns the type name used in conversion errors.
    pub fn name(self) -> &'static str {
        match self {
            Category::SignedInteger => "int64",
            Category::UnsignedInteger => "uint64",
            Category::Float => "float64",
            Category::String => "string",
            Category::Timestamp => "timestamp",
            Category::Structural => "structural",
        }
    }

    /// Returns true if values of this category support ordering operators.
    pub fn is_ordered(self) -> bool {
        self != Category::Structural
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
