//! # Check Validator
//!
//! Composable validation units and a sequential runner.
//!
//! A validation unit is any value implementing [`Validate`]: a deferred check
//! that captures its inputs when built and reports `Ok(())` or a
//! [`ValidationError`] when evaluated. Units are combined with [`run`] (or the
//! [`run!`] macro for mixed unit types), which stops at the first failure.
//!
//! ## Example
//!
//! ```rust
//! use check_validator::{between, email, gte, is_in, ne, required, values};
//!
//! let name = "James Bond";
//! let agent_id = 7;
//! let email_address = "007@example.co.uk";
//!
//! let result = check_validator::run![
//!     required![name, agent_id, email_address],
//!     between(agent_id, 1, 9),
//!     gte(name, "A"),
//!     ne(email_address, "m@example.co.uk"),
//!     is_in("MI6", values!["MI5", "MI6"]),
//!     email(email_address, true),
//! ];
//! assert!(result.is_ok());
//! ```

pub mod comparison;
pub mod email;
pub mod error;
pub mod format;
pub mod iban;
pub mod network;
pub mod pattern;
pub mod required;
pub mod runner;
pub mod text;
pub mod validate;
pub mod vat;

pub use comparison::{
    Between, Comparison, In, NotIn, between, compare_with, eq, gt, gte, is_in, lt, lte, ne,
    not_in,
};
pub use error::{EMPTY_ARGUMENT, ValidationError};
pub use format::{Format, FormatKind, email, email_list, iban, ip, mac, url, vat};
pub use pattern::{Matches, matches, matches_regex};
pub use required::{Required, required};
pub use runner::{Failure, RunOptions, RunReport, RunStats, run, run_with};
pub use validate::{BoxedCheck, FromFn, Validate, from_fn};

pub use check_core::{
    Category, CompareError, ConversionError, MapKey, Operator, Term, Value, coerce, compare,
    equals, is_empty,
};
