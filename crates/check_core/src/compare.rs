//! Comparison engine.
//!
//! Classifies the left operand, coerces the term into the same category and
//! applies the operator. Classification never looks at the term: `3 < "3"` is
//! a conversion error, not a string comparison.

use chrono::{DateTime, FixedOffset};
use tracing::trace;

use crate::{Category, CompareError, Operator, Value, coerce, equals};

/// An operator bound to its right-hand operand.
///
/// # Example
///
/// ```rust
/// use check_core::{Operator, Term, Value};
///
/// let term = Term::new(Operator::Lt, 26);
/// assert!(term.check(&Value::from(25)).is_ok());
/// assert!(term.check(&Value::from(26)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    op: Operator,
    operand: Value,
}

impl Term {
    /// Creates a new comparison term.
    pub fn new(op: Operator, operand: impl Into<Value>) -> Self {
        Self {
            op,
            operand: operand.into(),
        }
    }

    /// Creates a term from a numeric operator code.
    pub fn from_code(code: i64, operand: impl Into<Value>) -> Result<Self, CompareError> {
        Ok(Self::new(Operator::try_from(code)?, operand))
    }

    /// Returns the operator.
    pub fn op(&self) -> Operator {
        self.op
    }

    /// Returns the right-hand operand.
    pub fn operand(&self) -> &Value {
        &self.operand
    }

    /// Compares `x` against this term.
    pub fn check(&self, x: &Value) -> Result<(), CompareError> {
        compare(x, self.op, &self.operand)
    }
}

/// Compares `x` with `term` using `op`.
///
/// Returns `Ok(())` when the relation holds. Otherwise returns
/// [`CompareError::ComparisonFailed`], or a conversion error when `term`
/// cannot be coerced into `x`'s category, or
/// [`CompareError::UnsupportedOperator`] for an ordering operator on a
/// structural value.
///
/// # Example
///
/// ```rust
/// use check_core::{compare, Operator, Value};
///
/// assert!(compare(&Value::from(2), Operator::Lte, &Value::from(2)).is_ok());
///
/// let err = compare(&Value::from(3), Operator::Eq, &Value::from(4)).unwrap_err();
/// assert_eq!(err.to_string(), "`eq` comparison failed: `3` is not equal to `4`");
/// ```
pub fn compare(x: &Value, op: Operator, term: &Value) -> Result<(), CompareError> {
    trace!(op = %op, category = %Category::of(x), "comparing values");

    let holds = match x {
        Value::Int(v) => op.holds(v, &coerce::<i64>(term)?),
        Value::Uint(v) => op.holds(v, &coerce::<u64>(term)?),
        Value::Float(v) => op.holds(v, &coerce::<f64>(term)?),
        Value::String(v) => op.holds(v.as_str(), coerce::<&str>(term)?),
        Value::Timestamp(v) => op.holds(v, &coerce::<DateTime<FixedOffset>>(term)?),
        _ => compare_structural(x, op, term)?,
    };

    if holds {
        Ok(())
    } else {
        Err(CompareError::failed(op, x, term))
    }
}

/// Equality-only comparison for values without a defined ordering.
fn compare_structural(x: &Value, op: Operator, term: &Value) -> Result<bool, CompareError> {
    match op {
        Operator::Eq => Ok(equals(x, term)),
        Operator::Ne => Ok(!equals(x, term)),
        _ => Err(CompareError::unsupported(op, x, term)),
    }
}
