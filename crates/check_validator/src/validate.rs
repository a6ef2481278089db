//! The validation unit abstraction.

use std::fmt;

use crate::ValidationError;

/// A deferred, argument-free check.
///
/// Each check type captures its inputs at construction time and does nothing
/// until [`Validate::evaluate`] is called.
///
/// # Example
///
/// ```rust
/// use check_validator::{Validate, ValidationError};
///
/// struct NonZero(i64);
///
/// impl Validate for NonZero {
///     fn evaluate(&self) -> Result<(), ValidationError> {
///         if self.0 == 0 {
///             Err(ValidationError::custom("value must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero(3).evaluate().is_ok());
/// ```
pub trait Validate {
    /// Runs the check.
    fn evaluate(&self) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    fn evaluate(&self) -> Result<(), ValidationError> {
        (**self).evaluate()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn evaluate(&self) -> Result<(), ValidationError> {
        (**self).evaluate()
    }
}

/// Boxed validation unit, as produced from rule files.
pub type BoxedCheck = Box<dyn Validate + Send + Sync>;

/// A validation unit backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Wraps a closure into a validation unit.
///
/// ```rust
/// use check_validator::{from_fn, run, ValidationError};
///
/// let stock = 3;
/// let in_stock = from_fn(move || {
///     if stock > 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::custom("out of stock"))
///     }
/// });
/// assert!(run([in_stock]).is_ok());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> Result<(), ValidationError>,
{
    FromFn(f)
}

impl<F> Validate for FromFn<F>
where
    F: Fn() -> Result<(), ValidationError>,
{
    fn evaluate(&self) -> Result<(), ValidationError> {
        (self.0)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
