use anyhow::{Context, Result};
use check_core::{Operator, compare};
use check_parser::parse_literal;
use tracing::{debug, info};

use crate::output;

pub fn execute(left: &str, op: Operator, right: &str) -> Result<()> {
    info!("Comparing {} {} {}", left, op, right);

    let x = parse_literal(left).with_context(|| format!("Invalid left operand: {}", left))?;
    let term = parse_literal(right).with_context(|| format!("Invalid right operand: {}", right))?;
    debug!(
        left = x.type_name(),
        right = term.type_name(),
        "operands parsed"
    );

    match compare(&x, op, &term) {
        Ok(()) => {
            output::print_success(&format!("`{}` {} `{}` holds", x, op, term));
            Ok(())
        }
        Err(err) => {
            output::print_error(&err.to_string());
            std::process::exit(1);
        }
    }
}
