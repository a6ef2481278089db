//! Regular expression checks.

use std::borrow::Cow;

use regex::Regex;

use crate::required::blank;
use crate::text::is_blank;
use crate::{Validate, ValidationError};

#[derive(Debug, Clone)]
enum Pattern {
    Source(String),
    Compiled(Regex),
}

/// Pattern match check. See [`matches`] and [`matches_regex`].
#[derive(Debug, Clone)]
pub struct Matches {
    value: String,
    pattern: Pattern,
    required: bool,
}

/// Checks that `value` matches `pattern`, compiled at evaluation time.
///
/// A blank value succeeds unless `required` is set. A pattern that fails to
/// compile is reported as [`ValidationError::InvalidPattern`].
///
/// ```rust
/// use check_validator::{matches, Validate};
///
/// assert!(matches("007", r"^\d{3}$", true).evaluate().is_ok());
/// assert!(matches("", r"^\d{3}$", false).evaluate().is_ok());
/// ```
pub fn matches(value: impl Into<String>, pattern: impl Into<String>, required: bool) -> Matches {
    Matches {
        value: value.into(),
        pattern: Pattern::Source(pattern.into()),
        required,
    }
}

/// Checks that `value` matches an already compiled `regex`.
pub fn matches_regex(value: impl Into<String>, regex: &Regex, required: bool) -> Matches {
    Matches {
        value: value.into(),
        pattern: Pattern::Compiled(regex.clone()),
        required,
    }
}

impl Validate for Matches {
    fn evaluate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.value) {
            return blank(self.required, "match term cannot be empty");
        }

        let regex = match &self.pattern {
            Pattern::Compiled(regex) => Cow::Borrowed(regex),
            Pattern::Source(source) => {
                Cow::Owned(
                    Regex::new(source).map_err(|e| ValidationError::InvalidPattern {
                        pattern: source.clone(),
                        reason: e.to_string(),
                    })?,
                )
            }
        };

        if regex.is_match(&self.value) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch {
                value: self.value.clone(),
                pattern: regex.as_str().to_string(),
            })
        }
    }
}
