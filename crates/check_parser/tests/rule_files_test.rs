//! Loading rule files from disk and running them.

use check_parser::{ParserError, parse_file};
use check_validator::{run, run_with};
use std::io::Write;
use tempfile::Builder;

fn write_rules(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write rules");
    file
}

#[test]
fn test_yaml_file_runs_to_first_failure() {
    let file = write_rules(
        ".yml",
        r#"
name: agent
checks:
  - type: lt
    value: 25
    term: 26
  - type: lt
    value: 6.7
    term: 4.5
  - type: mac
    value: nonsense
"#,
    );

    let rules = parse_file(file.path()).expect("Failed to parse rules file");
    let err = run(rules.checks().unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`lt` comparison failed: `6.7` is not less than `4.5`"
    );
}

#[test]
fn test_toml_file_collects_all_failures_when_not_fail_fast() {
    let file = write_rules(
        ".toml",
        r#"
name = "contact"
fail_fast = false

[[checks]]
type = "email"
value = "test.example.com"

[[checks]]
type = "ip"
value = "127.0.0.1"

[[checks]]
type = "url"
value = "test@example"
"#,
    );

    let rules = parse_file(file.path()).unwrap();
    let report = run_with(rules.checks().unwrap(), &rules.run_options());

    let messages: Vec<String> = report
        .failures
        .iter()
        .map(|f| f.error.to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "invalid email address `test.example.com`",
            "invalid URL `test@example`"
        ]
    );
    assert_eq!(report.stats.checks_evaluated, 3);
}

#[test]
fn test_json_file() {
    let file = write_rules(
        ".json",
        r#"{"checks": [{"type": "iban", "value": "IE64IRCE92050112345678"}]}"#,
    );

    let rules = parse_file(file.path()).unwrap();
    assert!(run(rules.checks().unwrap()).is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = parse_file(std::path::Path::new("/nonexistent/rules.yml"));
    assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
}

#[test]
fn test_unknown_extension_is_rejected_before_reading() {
    let result = parse_file(std::path::Path::new("/nonexistent/rules.ini"));
    assert!(matches!(
        result.unwrap_err(),
        ParserError::UnsupportedFormat(ext) if ext == "ini"
    ));
}
