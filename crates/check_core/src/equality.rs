//! Equality and emptiness primitives.

use crate::Value;

/// Deep structural equality.
///
/// Lists compare element-wise, maps by key set and values, numbers by value
/// within the same variant, timestamps by instant. Values of different
/// variants are never equal, so `Int(1)` and `Uint(1)` differ.
pub fn equals(a: &Value, b: &Value) -> bool {
    a == b
}

/// Returns true if `x` counts as empty.
///
/// A value is empty when it is:
/// - nil, or an optional holding nothing
/// - a string, list or map of length 0
/// - an optional whose inner value is empty (checked recursively)
/// - the zero value of its own type
pub fn is_empty(x: &Value) -> bool {
    match x {
        Value::Nil | Value::Optional(None) => true,
        Value::String(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Optional(Some(inner)) => is_empty(inner),
        other => is_zero(other),
    }
}

/// Returns true if `x` equals the `Default` value of its variant.
///
/// The zero timestamp is the Unix epoch, whatever the offset.
pub fn is_zero(x: &Value) -> bool {
    match x {
        Value::Nil | Value::Optional(None) => true,
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Timestamp(t) => t.timestamp() == 0 && t.timestamp_subsec_nanos() == 0,
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Optional(Some(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use std::collections::HashMap;

    #[test]
    fn test_equals_is_structural() {
        assert!(equals(
            &Value::from(vec!["a", "b"]),
            &Value::from(vec!["a", "b"])
        ));
        assert!(!equals(
            &Value::from(vec!["a", "b"]),
            &Value::from(vec!["b", "a"])
        ));

        let mut left = HashMap::new();
        left.insert(1, 1);
        left.insert(2, 2);
        let mut right = HashMap::new();
        right.insert(2, 2);
        right.insert(1, 1);
        assert!(equals(&Value::from(left), &Value::from(right)));
    }

    #[test]
    fn test_equals_keeps_map_key_types() {
        let int_keyed = Value::from(HashMap::from([(1, 1)]));
        let string_keyed = Value::from(HashMap::from([("1".to_string(), 1)]));
        assert!(!equals(&int_keyed, &string_keyed));

        let signed = Value::from(HashMap::from([(1i32, "a")]));
        let unsigned = Value::from(HashMap::from([(1u32, "a")]));
        assert!(!equals(&signed, &unsigned));

        let widened = Value::from(HashMap::from([(1i8, "a")]));
        assert!(equals(&signed, &widened));
    }

    #[test]
    fn test_equals_distinguishes_variants() {
        assert!(!equals(&Value::from(1), &Value::from(1u8)));
        assert!(!equals(&Value::from(Vec::<String>::new()), &Value::Nil));
        assert!(equals(&Value::Nil, &Value::Nil));
    }

    #[test]
    fn test_equals_timestamps_by_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let paris = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .unwrap();
        assert!(equals(&Value::from(utc), &Value::from(paris)));
    }

    #[test]
    fn test_is_empty_lengths() {
        assert!(is_empty(&Value::Nil));
        assert!(is_empty(&Value::from("")));
        assert!(!is_empty(&Value::from("a")));
        assert!(is_empty(&Value::from(Vec::<String>::new())));
        assert!(!is_empty(&Value::from(vec![""])));
        assert!(is_empty(&Value::from(HashMap::<String, i32>::new())));
    }

    #[test]
    fn test_is_empty_zero_values() {
        assert!(is_empty(&Value::from(0)));
        assert!(is_empty(&Value::from(0u64)));
        assert!(is_empty(&Value::from(0.0)));
        assert!(is_empty(&Value::from(false)));
        assert!(!is_empty(&Value::from(true)));
        assert!(!is_empty(&Value::from(-1)));
        assert!(is_empty(&Value::from(Utc.timestamp_opt(0, 0).unwrap())));
        assert!(!is_empty(&Value::from(Utc::now())));
    }

    #[test]
    fn test_is_empty_unwraps_optionals() {
        assert!(is_empty(&Value::from(None::<String>)));
        assert!(is_empty(&Value::from(Some(""))));
        assert!(is_empty(&Value::from(Some(Some(0)))));
        assert!(!is_empty(&Value::from(Some("bond"))));
    }
}
