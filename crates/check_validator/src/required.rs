//! Presence checks.

use check_core::{Value, is_empty};

use crate::{Validate, ValidationError};

/// Fails when any of its values is empty.
///
/// Built with [`required`] or the [`required!`](crate::required!) macro.
#[derive(Debug, Clone, PartialEq)]
pub struct Required {
    values: Vec<Value>,
    message: Option<String>,
}

/// Creates a presence check over `values`.
///
/// Every item of the iterator is one value. To check a collection as a whole,
/// wrap it: `required([names])`, or use `required![names]`.
pub fn required<I>(values: I) -> Required
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Required {
        values: values.into_iter().map(Into::into).collect(),
        message: None,
    }
}

impl Required {
    /// Replaces the default "empty argument" message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the values under check.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Validate for Required {
    fn evaluate(&self) -> Result<(), ValidationError> {
        if self.values.iter().any(is_empty) {
            return Err(match &self.message {
                Some(message) => ValidationError::empty_with(message),
                None => ValidationError::empty(),
            });
        }
        Ok(())
    }
}

/// Builds a [`Required`] check from heterogeneous values.
///
/// ```rust
/// use check_validator::{required, Validate};
///
/// assert!(required!["Bond", 7, vec!["MI6"]].evaluate().is_ok());
/// assert!(required!["Bond", ""].evaluate().is_err());
/// ```
#[macro_export]
macro_rules! required {
    ($($value:expr),* $(,)?) => {
        $crate::required($crate::values![$($value),*])
    };
}

/// Outcome for a blank optional input: success unless it is required.
pub(crate) fn blank(required: bool, message: &str) -> Result<(), ValidationError> {
    if required {
        Err(ValidationError::empty_with(message))
    } else {
        Ok(())
    }
}
