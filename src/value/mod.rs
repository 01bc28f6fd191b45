//! Decoded, untyped values and the keys used to look into them.

mod convert;

use std::collections::BTreeMap;
use std::fmt;

/// Key-sorted map of named entries.
pub type Map = BTreeMap<String, Value>;

/// A decoded value of unknown shape.
///
/// This is the common representation navigated by [`Navigator`](crate::Navigator).
/// Values decoded by `toml` or `serde_json` convert into it with `From`, and any
/// self-describing serde format can deserialize into it directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for arrays and maps, the values a navigator can descend into.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` in this value.
    ///
    /// Integer and numeric-string keys address the same slot, so `Index(1)`
    /// finds the map entry `"1"` and `Name("1")` finds the second array
    /// element. Scalars have no entries.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::Map(m), Key::Name(name)) => m.get(name),
            (Value::Map(m), Key::Index(i)) => m.get(&i.to_string()),
            (Value::Array(a), Key::Index(i)) => a.get(*i),
            (Value::Array(a), Key::Name(name)) => parse_index(name).and_then(|i| a.get(i)),
            _ => None,
        }
    }
}

/// Parses a canonical decimal index: digits only, no sign, no leading zeros.
fn parse_index(s: &str) -> Option<usize> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

/// A single step into a container: an array position or a map entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

/// Negative integers have no array position and become the name `"-1"` etc.
impl From<i64> for Key {
    fn from(i: i64) -> Self {
        usize::try_from(i).map_or_else(|_| Key::Name(i.to_string()), Key::Index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        Value::Map(Map::from([
            ("name".to_string(), Value::from("Ada")),
            ("1".to_string(), Value::Bool(true)),
            (
                "list".to_string(),
                Value::Array(vec![Value::Integer(10), Value::Integer(20)]),
            ),
        ]))
    }

    #[test]
    fn test_get_by_name_and_index() {
        let value = sample();
        assert_eq!(value.get(&Key::from("name")), Some(&Value::from("Ada")));
        assert_eq!(value.get(&Key::Index(1)), Some(&Value::Bool(true)));
        assert_eq!(value.get(&Key::from("missing")), None);
    }

    #[test]
    fn test_array_accepts_numeric_names() {
        let list = sample().get(&Key::from("list")).cloned().unwrap();
        assert_eq!(list.get(&Key::Index(1)), Some(&Value::Integer(20)));
        assert_eq!(list.get(&Key::from("1")), Some(&Value::Integer(20)));
        assert_eq!(list.get(&Key::from("01")), None);
        assert_eq!(list.get(&Key::from("+1")), None);
        assert_eq!(list.get(&Key::from("x")), None);
    }

    #[test]
    fn test_scalars_have_no_entries() {
        assert_eq!(Value::Integer(3).get(&Key::Index(0)), None);
        assert_eq!(Value::Null.get(&Key::from("a")), None);
    }

    #[test]
    fn test_key_from_signed_integer() {
        assert_eq!(Key::from(2i64), Key::Index(2));
        assert_eq!(Key::from(-1i64), Key::from("-1"));

        let value = Value::Map(Map::from([("-1".to_string(), Value::Integer(7))]));
        assert_eq!(value.get(&Key::from(-1i64)), Some(&Value::Integer(7)));
        assert_eq!(
            Value::Array(vec![Value::Null]).get(&Key::from(-1i64)),
            None
        );
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Index(7).to_string(), "7");
        assert_eq!(Key::from("port").to_string(), "port");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Float(1.5).kind(), "float");
        assert_eq!(sample().kind(), "map");
        assert!(sample().is_container());
        assert!(!Value::from("x").is_container());
    }
}
