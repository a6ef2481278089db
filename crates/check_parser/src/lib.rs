//! Parser for declarative check rule files (YAML/TOML/JSON formats).
//!
//! This module reads rule documents into the strongly-typed [`RuleSet`]
//! structure and turns each rule into a runnable validation unit.
//!
//! # Example
//!
//! ```rust
//! use check_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: signup
//! checks:
//!   - type: required
//!     values: ["Bond", "007@example.co.uk"]
//!   - type: between
//!     value: 7
//!     lower: 1
//!     upper: 10
//!   - type: email
//!     value: 007@example.co.uk
//! "#;
//!
//! let rules = parse_yaml(yaml).expect("Failed to parse rules");
//! assert_eq!(rules.name.as_deref(), Some("signup"));
//! assert!(check_validator::run(rules.checks().unwrap()).is_ok());
//! ```

mod literal;
mod rules;

pub use literal::{literal_to_value, parse_literal};
pub use rules::{Rule, RuleSet};

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during rule file parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// A literal could not be turned into a value
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported rule file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a rule set from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_yaml_ng::from_str(content)?;
    Ok(rules)
}

/// Parse a rule set from a TOML string.
///
/// # Example
///
/// ```rust
/// use check_parser::parse_toml;
///
/// let toml = r#"
/// name = "release"
///
/// [[checks]]
/// type = "gte"
/// value = 2024-05-01T10:00:00+02:00
/// term = 2024-05-01T08:00:00Z
/// "#;
///
/// let rules = parse_toml(toml).unwrap();
/// assert_eq!(rules.checks.len(), 1);
/// ```
pub fn parse_toml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(rules)
}

/// Parse a rule set from a JSON string.
pub fn parse_json(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_json::from_str(content)?;
    Ok(rules)
}

/// Detect the rule file format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RuleFormat::Yaml`
/// * `.toml` → `RuleFormat::Toml`
/// * `.json` → `RuleFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RuleFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RuleFormat::Yaml),
        "toml" => Ok(RuleFormat::Toml),
        "json" => Ok(RuleFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule set from a file with automatic format detection.
///
/// ```no_run
/// use check_parser::parse_file;
/// use std::path::Path;
///
/// let rules = parse_file(Path::new("rules/signup.yml")).unwrap();
/// println!("Loaded {} checks", rules.checks.len());
/// ```
pub fn parse_file(path: &Path) -> Result<RuleSet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        RuleFormat::Yaml => parse_yaml(&content),
        RuleFormat::Toml => parse_toml(&content),
        RuleFormat::Json => parse_json(&content),
    }
}
