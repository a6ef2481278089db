//! Conversion of document literals into check values.

use chrono::DateTime;
use check_core::{MapKey, Value};
use serde_json::{Map, Number, Value as Literal};

use crate::{ParserError, Result};

/// Keys that mark a mapping as a timestamp literal.
///
/// The second one is how the `toml` deserializer hands over native datetimes.
const TIMESTAMP_KEYS: [&str; 2] = ["timestamp", "$__toml_private_datetime"];

/// Converts a literal read from a rule document into a [`Value`].
///
/// A mapping with the single key `timestamp` holding an RFC 3339 string is
/// read as a timestamp. Integers that do not fit an `i64` become unsigned.
pub fn literal_to_value(literal: &Literal) -> Result<Value> {
    Ok(match literal {
        Literal::Null => Value::Nil,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Number(n) => number_to_value(n)?,
        Literal::String(s) => Value::String(s.clone()),
        Literal::Array(items) => Value::List(
            items
                .iter()
                .map(literal_to_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        Literal::Object(entries) => match timestamp_text(entries) {
            Some(text) => parse_timestamp(text)?,
            None => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| Ok((MapKey::from(key), literal_to_value(value)?)))
                    .collect::<Result<_>>()?,
            ),
        },
    })
}

/// Parses a command-line literal.
///
/// Text that is valid JSON is converted like a document literal, so `5` is an
/// integer and `"5"` a string. Anything else is taken as a plain string.
pub fn parse_literal(text: &str) -> Result<Value> {
    match serde_json::from_str::<Literal>(text) {
        Ok(literal) => literal_to_value(&literal),
        Err(_) => Ok(Value::String(text.to_string())),
    }
}

fn number_to_value(n: &Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Int(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Uint(u))
    } else if let Some(f) = n.as_f64() {
        Ok(Value::Float(f))
    } else {
        Err(ParserError::InvalidLiteral(format!("unsupported number `{n}`")))
    }
}

fn timestamp_text(entries: &Map<String, Literal>) -> Option<&str> {
    if entries.len() != 1 {
        return None;
    }
    TIMESTAMP_KEYS
        .iter()
        .find_map(|key| entries.get(*key).and_then(Literal::as_str))
}

fn parse_timestamp(text: &str) -> Result<Value> {
    DateTime::parse_from_rfc3339(text)
        .map(Value::Timestamp)
        .map_err(|e| ParserError::InvalidLiteral(format!("invalid timestamp `{text}`: {e}")))
}
