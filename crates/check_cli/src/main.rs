mod commands;
mod output;

use anyhow::Result;
use check_core::Operator;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::verify::FormatArg;

#[derive(Parser)]
#[command(name = "check")]
#[command(version, about = "Run comparison and format checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every check of a rule file
    Run {
        /// Path to the rule file (YAML, TOML or JSON)
        rules: String,

        /// Evaluate all checks instead of stopping at the first failure
        #[arg(short, long)]
        all: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Check a single value against a well-known format
    Verify {
        /// Format to check
        #[arg(value_enum)]
        kind: FormatArg,

        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Accept an empty value
        #[arg(short, long)]
        optional: bool,
    },

    /// Compare two literals, e.g. `check compare 25 lt 26`
    Compare {
        /// Left operand (JSON literal or plain string)
        #[arg(allow_hyphen_values = true)]
        left: String,

        /// Operator: eq, ne, lt, lte, gt, gte (or ==, !=, <, <=, >, >=)
        op: Operator,

        /// Right operand (JSON literal or plain string)
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Run { rules, all, format } => commands::run::execute(&rules, all, &format),

        Commands::Verify {
            kind,
            value,
            optional,
        } => commands::verify::execute(kind, &value, !optional),

        Commands::Compare { left, op, right } => commands::compare::execute(&left, op, &right),
    }
}
