use anyhow::Result;
use check_validator::{Format, FormatKind, Validate};
use clap::ValueEnum;
use tracing::info;

use crate::output;

/// Format names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Email,
    EmailList,
    Url,
    Iban,
    Vat,
    Ip,
    Mac,
}

impl From<FormatArg> for FormatKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Email => FormatKind::Email,
            FormatArg::EmailList => FormatKind::EmailList,
            FormatArg::Url => FormatKind::Url,
            FormatArg::Iban => FormatKind::Iban,
            FormatArg::Vat => FormatKind::Vat,
            FormatArg::Ip => FormatKind::Ip,
            FormatArg::Mac => FormatKind::Mac,
        }
    }
}

pub fn execute(kind: FormatArg, value: &str, required: bool) -> Result<()> {
    let kind = FormatKind::from(kind);
    info!("Verifying {}: {}", kind.name(), value);

    match Format::new(kind, value, required).evaluate() {
        Ok(()) => {
            output::print_success(&format!("valid {} `{}`", kind, value));
            Ok(())
        }
        Err(err) => {
            output::print_error(&err.to_string());
            std::process::exit(1);
        }
    }
}
