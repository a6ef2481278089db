use anyhow::{Context, Result};
use check_parser::parse_file;
use check_validator::run_with;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(rules_path: &str, all: bool, format: &str) -> Result<()> {
    info!("Running rule file: {}", rules_path);

    let path = Path::new(rules_path);
    let rules = parse_file(path)
        .with_context(|| format!("Failed to parse rule file: {}", rules_path))?;
    let checks = rules
        .checks()
        .with_context(|| format!("Invalid check definition in: {}", rules_path))?;

    let mut options = rules.run_options();
    if all {
        options = options.with_fail_fast(false);
    }
    info!("Fail fast: {}", options.fail_fast);

    let report = run_with(checks, &options);
    output::print_run_report(&rules, &report, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
