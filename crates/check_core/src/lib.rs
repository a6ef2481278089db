//! # Check Core
//!
//! Value model and generic comparison engine for composable checks.
//!
//! This crate provides the building blocks every check is made of:
//!
//! - **Value**: a tagged union over the runtime types a check can inspect
//! - **Coercion**: reinterpreting a value as the native type of a category
//! - **Equality**: deep structural equality and the "is empty" predicate
//! - **Comparison**: `compare(x, op, term)` across integers, unsigned integers,
//!   floats, strings, timestamps and structural values
//!
//! ## Example
//!
//! ```rust
//! use check_core::{compare, CompareError, Operator, Value};
//!
//! assert!(compare(&Value::from(25), Operator::Gte, &Value::from(25)).is_ok());
//!
//! // The left operand decides the category; the term must follow it.
//! let err = compare(&Value::from(3), Operator::Lt, &Value::from("3")).unwrap_err();
//! assert!(matches!(err, CompareError::Conversion(_)));
//! ```

pub mod coerce;
pub mod compare;
pub mod equality;
pub mod error;
pub mod operator;
pub mod value;

pub use coerce::*;
pub use compare::*;
pub use equality::*;
pub use error::*;
pub use operator::*;
pub use value::*;
