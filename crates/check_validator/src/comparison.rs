//! Comparison, range and membership checks.

use check_core::{Operator, Term, Value, compare};

use crate::{Validate, ValidationError};

/// Compares a value against a [`Term`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    value: Value,
    term: Term,
}

impl Comparison {
    /// Returns the left operand.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the bound operator and right operand.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl Validate for Comparison {
    fn evaluate(&self) -> Result<(), ValidationError> {
        Ok(self.term.check(&self.value)?)
    }
}

/// Checks `x <op> term`.
pub fn compare_with(x: impl Into<Value>, op: Operator, term: impl Into<Value>) -> Comparison {
    Comparison {
        value: x.into(),
        term: Term::new(op, term),
    }
}

/// Checks `x == term`.
pub fn eq(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Eq, term)
}

/// Checks `x != term`.
pub fn ne(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Ne, term)
}

/// Checks `x < term`.
pub fn lt(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Lt, term)
}

/// Checks `x <= term`.
pub fn lte(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Lte, term)
}

/// Checks `x > term`.
pub fn gt(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Gt, term)
}

/// Checks `x >= term`.
pub fn gte(x: impl Into<Value>, term: impl Into<Value>) -> Comparison {
    compare_with(x, Operator::Gte, term)
}

/// Inclusive range check. See [`between`].
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    value: Value,
    lower: Value,
    upper: Value,
}

/// Checks `lower <= x <= upper`.
///
/// The lower bound is checked first, so a value below the range reports the
/// `gte` failure.
pub fn between(x: impl Into<Value>, lower: impl Into<Value>, upper: impl Into<Value>) -> Between {
    Between {
        value: x.into(),
        lower: lower.into(),
        upper: upper.into(),
    }
}

impl Validate for Between {
    fn evaluate(&self) -> Result<(), ValidationError> {
        compare(&self.value, Operator::Gte, &self.lower)?;
        compare(&self.value, Operator::Lte, &self.upper)?;
        Ok(())
    }
}

/// Membership check. See [`is_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    value: Value,
    candidates: Vec<Value>,
}

/// Checks that `x` equals at least one of `candidates`.
///
/// Candidates that cannot be compared with `x` count as non-matches.
///
/// ```rust
/// use check_validator::{is_in, values, Validate};
///
/// assert!(is_in("b", values!["a", "b"]).evaluate().is_ok());
/// assert!(is_in(2, values!["2", 3]).evaluate().is_err());
/// ```
pub fn is_in<I>(x: impl Into<Value>, candidates: I) -> In
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    In {
        value: x.into(),
        candidates: candidates.into_iter().map(Into::into).collect(),
    }
}

impl Validate for In {
    fn evaluate(&self) -> Result<(), ValidationError> {
        if self.candidates.iter().any(|c| is_match(&self.value, c)) {
            Ok(())
        } else {
            Err(ValidationError::not_in_set(&self.value, &self.candidates))
        }
    }
}

/// Exclusion check. See [`not_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct NotIn {
    value: Value,
    candidates: Vec<Value>,
}

/// Checks that `x` equals none of `candidates`.
///
/// Candidates that cannot be compared with `x` count as non-matches.
pub fn not_in<I>(x: impl Into<Value>, candidates: I) -> NotIn
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    NotIn {
        value: x.into(),
        candidates: candidates.into_iter().map(Into::into).collect(),
    }
}

impl Validate for NotIn {
    fn evaluate(&self) -> Result<(), ValidationError> {
        match self.candidates.iter().find(|c| is_match(&self.value, c)) {
            Some(matched) => Err(ValidationError::in_set(
                &self.value,
                matched,
                &self.candidates,
            )),
            None => Ok(()),
        }
    }
}

fn is_match(value: &Value, candidate: &Value) -> bool {
    compare(value, Operator::Eq, candidate).is_ok()
}

/// Builds a `Vec<Value>` from heterogeneous expressions.
///
/// ```rust
/// use check_validator::{values, Value};
///
/// let list = values!["a", 1, 2.5];
/// assert_eq!(list[1], Value::Int(1));
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        ::std::vec::Vec::<$crate::Value>::from([$($crate::Value::from($value)),*])
    };
}
