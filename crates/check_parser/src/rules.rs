//! Declarative rule documents.

use check_core::{Operator, Value};
use check_validator::{
    BoxedCheck, Format, FormatKind, RunOptions, between, compare_with, is_in, matches, not_in,
    required,
};
use serde::Deserialize;
use serde_json::Value as Literal;

use crate::Result;
use crate::literal::literal_to_value;

fn default_true() -> bool {
    true
}

/// A named set of checks, as read from a rule file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Stop at the first failing check
    #[serde(default = "default_true")]
    pub fail_fast: bool,
    pub checks: Vec<Rule>,
}

impl RuleSet {
    /// Builds the validation unit of every rule, in order.
    pub fn checks(&self) -> Result<Vec<BoxedCheck>> {
        self.checks.iter().map(Rule::to_check).collect()
    }

    /// Run options as configured by the document.
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new().with_fail_fast(self.fail_fast)
    }
}

/// A single declarative check, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    Required {
        values: Vec<Literal>,
        #[serde(default)]
        message: Option<String>,
    },
    Eq {
        value: Literal,
        term: Literal,
    },
    Ne {
        value: Literal,
        term: Literal,
    },
    Lt {
        value: Literal,
        term: Literal,
    },
    Lte {
        value: Literal,
        term: Literal,
    },
    Gt {
        value: Literal,
        term: Literal,
    },
    Gte {
        value: Literal,
        term: Literal,
    },
    Between {
        value: Literal,
        lower: Literal,
        upper: Literal,
    },
    In {
        value: Literal,
        candidates: Vec<Literal>,
    },
    NotIn {
        value: Literal,
        candidates: Vec<Literal>,
    },
    Matches {
        value: String,
        pattern: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Email {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    EmailList {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Url {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Iban {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Vat {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Ip {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
    Mac {
        value: String,
        #[serde(default = "default_true")]
        required: bool,
    },
}

impl Rule {
    /// The rule's `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Required { .. } => "required",
            Rule::Eq { .. } => "eq",
            Rule::Ne { .. } => "ne",
            Rule::Lt { .. } => "lt",
            Rule::Lte { .. } => "lte",
            Rule::Gt { .. } => "gt",
            Rule::Gte { .. } => "gte",
            Rule::Between { .. } => "between",
            Rule::In { .. } => "in",
            Rule::NotIn { .. } => "not_in",
            Rule::Matches { .. } => "matches",
            Rule::Email { .. } => "email",
            Rule::EmailList { .. } => "email_list",
            Rule::Url { .. } => "url",
            Rule::Iban { .. } => "iban",
            Rule::Vat { .. } => "vat",
            Rule::Ip { .. } => "ip",
            Rule::Mac { .. } => "mac",
        }
    }

    /// Builds the validation unit described by this rule.
    pub fn to_check(&self) -> Result<BoxedCheck> {
        let check: BoxedCheck = match self {
            Rule::Required { values, message } => {
                let check = required(convert_all(values)?);
                match message {
                    Some(message) => Box::new(check.with_message(message.as_str())),
                    None => Box::new(check),
                }
            }
            Rule::Eq { value, term } => comparison(value, Operator::Eq, term)?,
            Rule::Ne { value, term } => comparison(value, Operator::Ne, term)?,
            Rule::Lt { value, term } => comparison(value, Operator::Lt, term)?,
            Rule::Lte { value, term } => comparison(value, Operator::Lte, term)?,
            Rule::Gt { value, term } => comparison(value, Operator::Gt, term)?,
            Rule::Gte { value, term } => comparison(value, Operator::Gte, term)?,
            Rule::Between {
                value,
                lower,
                upper,
            } => Box::new(between(
                literal_to_value(value)?,
                literal_to_value(lower)?,
                literal_to_value(upper)?,
            )),
            Rule::In { value, candidates } => {
                Box::new(is_in(literal_to_value(value)?, convert_all(candidates)?))
            }
            Rule::NotIn { value, candidates } => {
                Box::new(not_in(literal_to_value(value)?, convert_all(candidates)?))
            }
            Rule::Matches {
                value,
                pattern,
                required,
            } => Box::new(matches(value.as_str(), pattern.as_str(), *required)),
            Rule::Email { value, required } => format_check(FormatKind::Email, value, *required),
            Rule::EmailList { value, required } => {
                format_check(FormatKind::EmailList, value, *required)
            }
            Rule::Url { value, required } => format_check(FormatKind::Url, value, *required),
            Rule::Iban { value, required } => format_check(FormatKind::Iban, value, *required),
            Rule::Vat { value, required } => format_check(FormatKind::Vat, value, *required),
            Rule::Ip { value, required } => format_check(FormatKind::Ip, value, *required),
            Rule::Mac { value, required } => format_check(FormatKind::Mac, value, *required),
        };
        Ok(check)
    }
}

fn convert_all(literals: &[Literal]) -> Result<Vec<Value>> {
    literals.iter().map(literal_to_value).collect()
}

fn comparison(value: &Literal, op: Operator, term: &Literal) -> Result<BoxedCheck> {
    Ok(Box::new(compare_with(
        literal_to_value(value)?,
        op,
        literal_to_value(term)?,
    )))
}

fn format_check(kind: FormatKind, value: &str, required: bool) -> BoxedCheck {
    Box::new(Format::new(kind, value, required))
}
