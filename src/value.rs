//! Script values.
//!
//! `Value` is the dynamic type bound into a script [`Context`](crate::Context)
//! with `bind()`. Rendering and truthiness follow the loose conventions of
//! classic scripting hosts: `Display` is echo-style output, `Debug` is an
//! export-style dump, and `is_truthy` treats `0`, `0.0`, `""`, `"0"`, `null`,
//! `false` and the empty array as falsy.
use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A dynamically typed script value.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(*self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(*self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(*self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(*self, Value::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(*self, Value::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(*self, Value::Array(_))
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Str(ref s) => Some(s),
            _ => None,
        }
    }

    /// Coerce the value to an integer.
    pub fn to_int(&self) -> i64 {
        match *self {
            Value::Null => 0,
            Value::Bool(b) => b as i64,
            Value::Int(i) => i,
            Value::Float(f) => f as i64,
            Value::Str(ref s) => s.trim().parse().unwrap_or(0),
            Value::Array(ref a) => !a.is_empty() as i64,
        }
    }

    /// Coerce the value to a float.
    pub fn to_float(&self) -> f64 {
        match *self {
            Value::Float(f) => f,
            Value::Str(ref s) => s.trim().parse().unwrap_or(0.0),
            ref other => other.to_int() as f64,
        }
    }

    /// Loose boolean conversion. `null`, `false`, `0`, `0.0`, `""`, `"0"`
    /// and the empty array are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match *self {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Int(i) => i != 0,
            Value::Float(f) => f != 0.0,
            Value::Str(ref s) => !s.is_empty() && s != "0",
            Value::Array(ref a) => !a.is_empty(),
        }
    }

    /// A pretty name for the type of the value.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Serialize the value to a JSON string.
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Value {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Echo-style rendering: `null` and `false` print as nothing, `true` as `1`,
/// arrays as the literal word `Array`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Null => Ok(()),
            Value::Bool(false) => Ok(()),
            Value::Bool(true) => f.write_str("1"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(ref s) => f.write_str(s),
            Value::Array(_) => f.write_str("Array"),
        }
    }
}

/// Export-style rendering, one value per line for arrays.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(ref s) => {
                write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            Value::Array(ref items) => {
                f.write_str("array (\n")?;
                for (i, item) in items.iter().enumerate() {
                    write!(f, "  {} => {:?},\n", i, item)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(b),
            Value::Int(i) => serializer.serialize_i64(i),
            Value::Float(f) => serializer.serialize_f64(f),
            Value::Str(ref s) => serializer.serialize_str(s),
            Value::Array(ref items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(100_000_000i64), Value::Int(100_000_000));
        assert_eq!(Value::from(100.525), Value::Float(100.525));
        assert_eq!(Value::from("Hello, world!"), Value::Str("Hello, world!".into()));
        assert_eq!(
            Value::from(vec!["Hello", "world!"]),
            Value::Array(vec![Value::from("Hello"), Value::from("world!")])
        );
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(1i64)), Value::Int(1));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(!Value::Array(vec![]).is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(Value::from("1").is_truthy());
        assert!(Value::from("00").is_truthy());
        assert!(Value::from("false").is_truthy());
        assert!(Value::from(vec![0i64]).is_truthy());
    }

    #[test]
    fn test_echo_rendering() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "1");
        assert_eq!(Value::Bool(false).to_string(), "");
        assert_eq!(Value::Int(100_000_000).to_string(), "100000000");
        assert_eq!(Value::Float(100.525).to_string(), "100.525");
        assert_eq!(Value::from("Hello, world!").to_string(), "Hello, world!");
        assert_eq!(Value::from(vec!["Hello"]).to_string(), "Array");
    }

    #[test]
    fn test_export_rendering() {
        assert_eq!(format!("{:?}", Value::Null), "NULL");
        assert_eq!(format!("{:?}", Value::from("it's")), "'it\\'s'");
        assert_eq!(
            format!("{:?}", Value::from(vec!["Hello", "world!"])),
            "array (\n  0 => 'Hello',\n  1 => 'world!',\n)"
        );
    }

    #[test]
    fn test_coercions() {
        assert_eq!(Value::from("42").to_int(), 42);
        assert_eq!(Value::from(" 42 ").to_int(), 42);
        assert_eq!(Value::from("nope").to_int(), 0);
        assert_eq!(Value::Bool(true).to_int(), 1);
        assert_eq!(Value::from("100.525").to_float(), 100.525);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_json() {
        assert_eq!(Value::Null.to_json().unwrap(), "null");
        assert_eq!(Value::Int(7).to_json().unwrap(), "7");
        assert_eq!(
            Value::from(vec!["Hello", "world!"]).to_json().unwrap(),
            r#"["Hello","world!"]"#
        );
    }
}
