//! Bindable values.
//!
//! Every parameter-bound fragment (keyed condition, UPDATE assignment, INSERT
//! value) stores a [`Value`]. Rendering copies them, in placeholder order, into
//! the builder's binding list and classifies each one with a single-character
//! [type tag](Value::type_tag).

use crate::error::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Integer (tag `i`)
    Int(i64),
    /// Floating-point (tag `d`)
    Float(f64),
    /// Text
    Text(String),
}

impl Value {
    /// Classify this value for a prepared-statement parameter typing step.
    ///
    /// Integers are `i`, doubles are `d`, everything else is `s`.
    pub fn type_tag(&self) -> char {
        match self {
            Value::Int(_) => 'i',
            Value::Float(_) => 'd',
            Value::Null | Value::Bool(_) | Value::Text(_) => 's',
        }
    }

    /// Whether this value inlines as a bare numeral.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) => true,
            Value::Float(f) => f.is_finite(),
            _ => false,
        }
    }

    /// Check if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Append the inline SQL literal for this value to `out`.
    ///
    /// Numbers are written bare, NULL as the keyword, and everything else as a
    /// single-quoted string with backslash escaping. This is **not** an
    /// injection defense and must only be used for logs and debugging.
    pub fn write_literal(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("NULL"),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(f) if f.is_finite() => out.push_str(&f.to_string()),
            Value::Float(f) => push_quoted(out, &f.to_string()),
            Value::Bool(b) => push_quoted(out, if *b { "1" } else { "0" }),
            Value::Text(s) => push_quoted(out, s),
        }
    }

    /// Render the inline SQL literal for this value.
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        self.write_literal(&mut out);
        out
    }

    /// Convert a scalar JSON value.
    ///
    /// Numbers that fit in `i64` become [`Value::Int`], other numbers
    /// [`Value::Float`]. Arrays and objects have no scalar binding and are
    /// rejected.
    pub fn from_json(value: &serde_json::Value) -> QueryResult<Self> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    return Err(QueryError::unsupported(format!("number out of range: {n}")));
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(_) => {
                return Err(QueryError::unsupported("JSON array cannot be bound"));
            }
            serde_json::Value::Object(_) => {
                return Err(QueryError::unsupported("JSON object cannot be bound"));
            }
        })
    }
}

/// Quote `s` with `'` and escape `\`, `'`, `"` and NUL with a backslash.
fn push_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' | '\'' | '"' => {
                out.push('\\');
                out.push(ch);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = QueryError;

    fn try_from(value: serde_json::Value) -> QueryResult<Self> {
        Value::from_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tags() {
        assert_eq!(Value::from(7i32).type_tag(), 'i');
        assert_eq!(Value::from(7u8).type_tag(), 'i');
        assert_eq!(Value::from(1.5f64).type_tag(), 'd');
        assert_eq!(Value::from("x").type_tag(), 's');
        assert_eq!(Value::from(true).type_tag(), 's');
        assert_eq!(Value::Null.type_tag(), 's');
    }

    #[test]
    fn test_literals() {
        assert_eq!(Value::from(42i64).to_literal(), "42");
        assert_eq!(Value::from(-3i32).to_literal(), "-3");
        assert_eq!(Value::from(2.5f64).to_literal(), "2.5");
        assert_eq!(Value::from("admin").to_literal(), "'admin'");
        assert_eq!(Value::Null.to_literal(), "NULL");
        assert_eq!(Value::from(true).to_literal(), "'1'");
        assert_eq!(Value::from(false).to_literal(), "'0'");
        // the variant decides quoting, not the text's shape
        assert_eq!(Value::from("42").to_literal(), "'42'");
        assert_eq!(Value::from("42").type_tag(), 's');
    }

    #[test]
    fn test_literal_escaping() {
        assert_eq!(Value::from("O'Brien").to_literal(), r"'O\'Brien'");
        assert_eq!(Value::from(r"C:\tmp").to_literal(), r"'C:\\tmp'");
        assert_eq!(Value::from("say \"hi\"").to_literal(), r#"'say \"hi\"'"#);
        assert_eq!(Value::from("a\0b").to_literal(), r"'a\0b'");
    }

    #[test]
    fn test_non_finite_float_is_quoted() {
        let v = Value::from(f64::NAN);
        assert!(!v.is_numeric());
        assert_eq!(v.to_literal(), "'NaN'");
        assert_eq!(v.type_tag(), 'd');
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(5i32)), Value::Int(5));
        assert_eq!(Value::from(None::<&str>), Value::Null);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(&json!(null)).unwrap(), Value::Null);
        assert_eq!(Value::from_json(&json!(3)).unwrap(), Value::Int(3));
        assert_eq!(Value::from_json(&json!(0.25)).unwrap(), Value::Float(0.25));
        assert_eq!(Value::from_json(&json!("x")).unwrap(), Value::Text("x".into()));
        assert_eq!(Value::from_json(&json!(false)).unwrap(), Value::Bool(false));

        let err = Value::from_json(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedValue(_)));
        assert!(Value::try_from(json!({"a": 1})).is_err());
    }

    #[test]
    fn test_serde_untagged() {
        let values = vec![Value::Int(1), Value::Text("x".into()), Value::Null, Value::Float(1.5)];
        let encoded = serde_json::to_string(&values).unwrap();
        assert_eq!(encoded, r#"[1,"x",null,1.5]"#);

        let decoded: Vec<Value> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, values);
    }
}
