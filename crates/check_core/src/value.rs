//! Dynamically-typed values taking part in checks.
//!
//! Every operand handed to a check is converted into a [`Value`]. Integers of
//! every width are widened to `i64`/`u64` and floats to `f64` on the way in, so
//! the variant alone decides how two values are compared.

use chrono::{DateTime, FixedOffset, TimeZone};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::Category;

/// A value in a check.
///
/// Represents the different kinds of runtime values a check can inspect.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Nil,
    /// Boolean value
    Bool(bool),
    /// Signed integer value (any width, widened)
    Int(i64),
    /// Unsigned integer value (any width, widened)
    Uint(u64),
    /// Floating point value (single or double precision, widened)
    Float(f64),
    /// String value
    String(String),
    /// Timestamp value with its original offset
    Timestamp(DateTime<FixedOffset>),
    /// List/array value
    List(Vec<Value>),
    /// Map/struct value, keys kept in their native order
    Map(BTreeMap<MapKey, Value>),
    /// Optional value wrapping another value
    Optional(Option<Box<Value>>),
}

impl Value {
    /// Returns true if this value is nil or an empty optional.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Nil | Value::Optional(None))
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int64",
            Value::Uint(_) => "uint64",
            Value::Float(_) => "float64",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Optional(_) => "optional",
        }
    }

    /// Returns the comparison category this value belongs to.
    pub fn category(&self) -> Category {
        Category::of(self)
    }

    /// Attempts to get this value as a signed integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as an unsigned integer.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

/// A map key.
///
/// Keys keep their type, so `1` and `"1"` are different keys. Keys of one
/// type sort by their native ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    String(String),
    Timestamp(DateTime<FixedOffset>),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(b) => write!(f, "{b}"),
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::Uint(u) => write!(f, "{u}"),
            MapKey::String(s) => f.write_str(s),
            MapKey::Timestamp(t) => write!(f, "{t}"),
        }
    }
}

/// Formats a float like `%v`: shortest digits, exponent form once the
/// decimal exponent is below -4 or at least 6.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" });
    }

    let scientific = format!("{x:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if x != 0.0 && !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        write!(f, "{x}")
    }
}

/// Formats a sequence of values the way lists are printed: `[a b c]`.
pub fn join_values(values: &[Value]) -> String {
    ListDisplay(values).to_string()
}

struct ListDisplay<'a>(&'a [Value]);

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil | Value::Optional(None) => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => write_float(f, *x),
            Value::String(s) => f.write_str(s),
            Value::Timestamp(t) => write!(f, "{t}"),
            Value::List(items) => write!(f, "{}", ListDisplay(items)),
            Value::Map(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
            Value::Optional(Some(inner)) => write!(f, "Some({inner})"),
        }
    }
}

macro_rules! impl_from_widened {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_from_widened!(Int as i64: i8, i16, i32, i64, isize);
impl_from_widened!(Uint as u64: u8, u16, u32, u64, usize);
impl_from_widened!(Float as f64: f32, f64);

macro_rules! impl_map_key {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for MapKey {
                fn from(k: $t) -> Self {
                    MapKey::$variant(k as $wide)
                }
            }
        )+
    };
}

impl_map_key!(Int as i64: i8, i16, i32, i64, isize);
impl_map_key!(Uint as u64: u8, u16, u32, u64, usize);

impl From<bool> for MapKey {
    fn from(k: bool) -> Self {
        MapKey::Bool(k)
    }
}

impl From<String> for MapKey {
    fn from(k: String) -> Self {
        MapKey::String(k)
    }
}

impl From<&String> for MapKey {
    fn from(k: &String) -> Self {
        MapKey::String(k.clone())
    }
}

impl From<&str> for MapKey {
    fn from(k: &str) -> Self {
        MapKey::String(k.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for MapKey {
    fn from(k: DateTime<Tz>) -> Self {
        MapKey::Timestamp(k.fixed_offset())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::Timestamp(t.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Optional(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<MapKey>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(entries: HashMap<K, V, S>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<MapKey>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::List(iter.into_iter().collect())
    }
}
