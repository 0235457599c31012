//! JSON-like payload values that matched text is looked up against.
//!
//! [`Value`] is the data side of a template: the enclosed texts found by a
//! [`TextsBetween`](crate::TextsBetween) are keys or key paths into it, and
//! `&Value` can be passed straight to
//! [`TextsBetween::replace`](crate::TextsBetween::replace).
//!
//! ## Key paths
//!
//! [`Value::lookup`] first tries the text as an exact key of a top-level
//! object, so keys containing dots or brackets still work. Otherwise the text
//! is read as a path: object keys separated by `.`, array indices written as
//! `[n]`.
//!
//! ```rust
//! use texts_between::value;
//!
//! let data = value!({
//!     "user": { "name": "squid", "tags": ["sea", "ink"] },
//!     "user.name": "shadowed"
//! });
//!
//! assert_eq!(data.lookup("user.name").and_then(|v| v.as_str()), Some("shadowed"));
//! assert_eq!(data.lookup("user.tags[1]").and_then(|v| v.as_str()), Some("ink"));
//! assert!(data.lookup("user.age").is_none());
//! ```
//!
//! ## Serde
//!
//! `Value` implements `Serialize` and `Deserialize`, so payloads can be loaded
//! from any serde format:
//!
//! ```rust
//! use texts_between::Value;
//!
//! let data: Value = serde_json::from_str(r#"{"count": 3}"#).unwrap();
//! assert_eq!(data.lookup("count").and_then(|v| v.as_i64()), Some(3));
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A dynamically-typed JSON-like value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric value: integer or float.
///
/// # Examples
///
/// ```rust
/// use texts_between::Number;
///
/// assert_eq!(Number::Integer(42).as_i64(), Some(42));
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Converts to `i64` for integers and for floats with no fractional part
    /// that fit in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// One step of a key path.
#[derive(Debug, PartialEq)]
enum PathStep<'p> {
    Key(&'p str),
    Index(usize),
}

/// Parses `a.b[0][1].c` into steps; `None` if the path is malformed.
fn parse_path(path: &str) -> Option<Vec<PathStep<'_>>> {
    let mut steps = Vec::new();
    for part in path.split('.') {
        let (key, mut rest) = part.split_at(part.find('[').unwrap_or(part.len()));
        if !key.is_empty() {
            steps.push(PathStep::Key(key));
        } else if rest.is_empty() {
            return None;
        }
        while !rest.is_empty() {
            let inside = rest.strip_prefix('[')?;
            let close = inside.find(']')?;
            steps.push(PathStep::Index(inside[..close].parse().ok()?));
            rest = &inside[close + 1..];
        }
    }
    Some(steps)
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Looks up `key` as an exact top-level key, falling back to a key path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::value;
    ///
    /// let data = value!({ "wo[rl]d": "earth", "items": [{ "sku": "W-1" }] });
    /// assert_eq!(data.lookup("wo[rl]d").and_then(|v| v.as_str()), Some("earth"));
    /// assert_eq!(data.lookup("items[0].sku").and_then(|v| v.as_str()), Some("W-1"));
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        if let Some(found) = self.as_object().and_then(|obj| obj.get(key)) {
            return Some(found);
        }
        self.pointer(key)
    }

    /// Follows a key path of `.`-separated object keys and `[n]` array indices.
    ///
    /// Returns `None` for an empty or malformed path, a missing key, an index
    /// out of bounds, or a step into a value of the wrong kind.
    #[must_use]
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        parse_path(path)?
            .into_iter()
            .try_fold(self, |current, step| match (step, current) {
                (PathStep::Key(key), Value::Object(obj)) => obj.get(key),
                (PathStep::Index(index), Value::Array(arr)) => arr.get(index),
                _ => None,
            })
    }

    /// Text substituted for a match that resolved to this value.
    ///
    /// Strings are used as they are, null becomes the empty string, anything
    /// else is rendered with [`Display`](fmt::Display).
    #[must_use]
    pub fn as_replacement(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// Compact JSON-like rendering; strings are quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write_quoted(f, s),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                f.write_str("{")?;
                for (i, (key, item)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON-like value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::Number(Number::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("integer", value.kind()))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("number", value.kind()))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::type_mismatch("bool", value.kind()))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.kind())),
        }
    }
}

// From implementations for creating values from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(i64::from(value)))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        let mut user = Map::new();
        user.insert("name".to_string(), Value::from("squid"));
        user.insert(
            "tags".to_string(),
            Value::from(vec![Value::from("sea"), Value::from("ink")]),
        );
        let mut root = Map::new();
        root.insert("user".to_string(), Value::from(user));
        root.insert("count".to_string(), Value::from(3));
        Value::from(root)
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            parse_path("a.b[0][12].c"),
            Some(vec![
                PathStep::Key("a"),
                PathStep::Key("b"),
                PathStep::Index(0),
                PathStep::Index(12),
                PathStep::Key("c"),
            ])
        );
        assert_eq!(parse_path("[1]"), Some(vec![PathStep::Index(1)]));
        assert_eq!(parse_path(""), None);
        assert_eq!(parse_path("a..b"), None);
        assert_eq!(parse_path("a[x]"), None);
        assert_eq!(parse_path("a[1"), None);
        assert_eq!(parse_path("a[1]b"), None);
    }

    #[test]
    fn test_pointer() {
        let data = sample();
        assert_eq!(data.pointer("user.name").and_then(Value::as_str), Some("squid"));
        assert_eq!(data.pointer("user.tags[0]").and_then(Value::as_str), Some("sea"));
        assert!(data.pointer("user.tags[2]").is_none());
        assert!(data.pointer("count.name").is_none());
        assert!(data.pointer("").is_none());
    }

    #[test]
    fn test_lookup_prefers_exact_key() {
        let mut root = Map::new();
        root.insert("a.b".to_string(), Value::from("exact"));
        root.insert("".to_string(), Value::from("empty"));
        let data = Value::from(root);
        assert_eq!(data.lookup("a.b").and_then(Value::as_str), Some("exact"));
        assert_eq!(data.lookup("").and_then(Value::as_str), Some("empty"));
    }

    #[test]
    fn test_lookup_on_array_root() {
        let data = Value::from(vec![Value::from(10), Value::from(20)]);
        assert_eq!(data.lookup("[1]").and_then(Value::as_i64), Some(20));
    }

    #[test]
    fn test_as_replacement() {
        assert_eq!(Value::from("plain").as_replacement(), "plain");
        assert_eq!(Value::Null.as_replacement(), "");
        assert_eq!(Value::from(1).as_replacement(), "1");
        assert_eq!(Value::from(2.5).as_replacement(), "2.5");
        assert_eq!(Value::from(true).as_replacement(), "true");
        assert_eq!(
            sample().lookup("user").map(|v| v.as_replacement().into_owned()),
            Some(r#"{"name":"squid","tags":["sea","ink"]}"#.to_string())
        );
    }

    #[test]
    fn test_display_escapes_strings() {
        assert_eq!(Value::from("say \"hi\"\n").to_string(), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(i64::try_from(Value::from(42.0)).unwrap(), 42);
        assert_eq!(f64::try_from(Value::from(3)).unwrap(), 3.0);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");

        let err = i64::try_from(Value::from("test")).unwrap_err();
        assert_eq!(err, crate::Error::type_mismatch("integer", "string"));
        assert!(String::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Value) -> bool {
            v.is_null()
        }

        assert!(check_null(&Value::Null));
        assert!(Value::from(1).is_number() && !Value::from(1).is_string());
        assert!(sample().is_object() && !sample().is_array());
    }
}
