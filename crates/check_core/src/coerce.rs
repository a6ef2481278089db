//! Type coercion layer.
//!
//! Reinterprets a [`Value`] as the native representation of a comparison
//! category. No implicit conversions happen here: a string is never parsed as
//! a number or a timestamp, and a number is never stringified.

use chrono::{DateTime, FixedOffset};

use crate::{Category, ConversionError, Value};

/// A native type a [`Value`] can be coerced into.
pub trait Coerce<'a>: Sized {
    /// Category this type represents.
    const CATEGORY: Category;

    /// Extracts the native value if the variant belongs to the category.
    fn extract(value: &'a Value) -> Option<Self>;
}

impl Coerce<'_> for i64 {
    const CATEGORY: Category = Category::SignedInteger;

    fn extract(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl Coerce<'_> for u64 {
    const CATEGORY: Category = Category::UnsignedInteger;

    fn extract(value: &Value) -> Option<Self> {
        value.as_uint()
    }
}

impl Coerce<'_> for f64 {
    const CATEGORY: Category = Category::Float;

    fn extract(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl<'a> Coerce<'a> for &'a str {
    const CATEGORY: Category = Category::String;

    fn extract(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl Coerce<'_> for DateTime<FixedOffset> {
    const CATEGORY: Category = Category::Timestamp;

    fn extract(value: &Value) -> Option<Self> {
        value.as_timestamp()
    }
}

/// Coerces `value` into `T`.
///
/// Fails with a [`ConversionError`] naming `T`'s category when the value is
/// absent or its variant belongs to another category.
///
/// # Example
///
/// ```rust
/// use check_core::{coerce, Value};
///
/// assert_eq!(coerce::<i64>(&Value::from(7i8)).unwrap(), 7);
/// assert!(coerce::<i64>(&Value::from("7")).is_err());
/// ```
pub fn coerce<'a, T: Coerce<'a>>(value: &'a Value) -> Result<T, ConversionError> {
    if value.is_absent() {
        return Err(ConversionError::new(T::CATEGORY, value));
    }
    T::extract(value).ok_or_else(|| ConversionError::new(T::CATEGORY, value))
}
