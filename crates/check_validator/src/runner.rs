//! Sequential execution of validation units.

use std::time::Instant;

use tracing::debug;

use crate::{Validate, ValidationError};

/// Runs `units` in order and returns the first failure.
///
/// Units after the first failing one are not evaluated. An empty sequence
/// succeeds.
///
/// ```rust
/// use check_validator::{eq, gt, run};
///
/// assert!(run([eq(1, 1), gt(2, 1)]).is_ok());
/// assert!(run([eq(1, 2), gt(2, 1)]).is_err());
/// ```
pub fn run<I>(units: I) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: Validate,
{
    for (index, unit) in units.into_iter().enumerate() {
        if let Err(err) = unit.evaluate() {
            debug!(index, error = %err, "check failed");
            return Err(err);
        }
    }
    Ok(())
}

/// Runs heterogeneous validation units, stopping at the first failure.
///
/// ```rust
/// use check_validator::{between, email, required};
///
/// let result = check_validator::run![
///     required!["Bond"],
///     between(7, 1, 10),
///     email("007@example.co.uk", true),
/// ];
/// assert!(result.is_ok());
/// ```
#[macro_export]
macro_rules! run {
    ($($unit:expr),* $(,)?) => {{
        let units: &[&dyn $crate::Validate] = &[$(&$unit),*];
        $crate::run(units.iter().copied())
    }};
}

/// Options controlling [`run_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop at the first failing unit
    pub fail_fast: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

impl RunOptions {
    /// Creates options with fail-fast enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether evaluation stops at the first failure.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// A failing unit and its position in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub index: usize,
    pub error: ValidationError,
}

/// Statistics about a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub checks_total: usize,
    pub checks_evaluated: usize,
    pub failures: usize,
    pub duration_ms: u64,
}

/// The outcome of [`run_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub passed: bool,
    pub failures: Vec<Failure>,
    pub stats: RunStats,
}

impl RunReport {
    /// Returns the first failure as a result, as [`run`] would.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(()),
        }
    }
}

/// Runs `units` and collects a report.
///
/// With `fail_fast` the report holds at most one failure and matches
/// [`run`]; without it every unit is evaluated.
pub fn run_with<I>(units: I, options: &RunOptions) -> RunReport
where
    I: IntoIterator,
    I::Item: Validate,
{
    let start = Instant::now();
    let units: Vec<I::Item> = units.into_iter().collect();
    let mut failures = Vec::new();
    let mut evaluated = 0;

    for (index, unit) in units.iter().enumerate() {
        evaluated += 1;
        if let Err(error) = unit.evaluate() {
            debug!(index, error = %error, "check failed");
            failures.push(Failure { index, error });
            if options.fail_fast {
                break;
            }
        }
    }

    let stats = RunStats {
        checks_total: units.len(),
        checks_evaluated: evaluated,
        failures: failures.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    debug!(
        total = stats.checks_total,
        evaluated = stats.checks_evaluated,
        failures = stats.failures,
        "run finished"
    );

    RunReport {
        passed: failures.is_empty(),
        failures,
        stats,
    }
}
