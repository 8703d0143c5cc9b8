//! Value types for Tabula
//!
//! This module defines:
//! - Value: Unified enum for all column data types
//!
//! ## Type Rules
//!
//! - Three types only: Null, Int, Text
//! - No implicit type coercions
//! - Different types are NEVER equal: `Int(1) != Text("1")`
//! - `Null` compares equal only to `Null`
//!
//! The `Display` impl renders a value as a SQL literal, which is what the
//! statement log prints.

use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical Tabula value type for column data
///
/// Columns are nullable, so every column can hold `Null` regardless of its
/// declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Null value (absent column data)
    Null,
    /// 64-bit signed integer
    Int(i64),
    /// UTF-8 text
    Text(String),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Int(_) => "Int",
            Value::Text(_) => "Text",
        }
    }

    /// Check if the value is Null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the integer payload, if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text payload, if this is Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        Value::Int(id.as_i64())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

// SQL-literal rendering: single quotes doubled inside text literals.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_types_never_equal() {
        assert_ne!(Value::Int(1), Value::Text("1".to_string()));
        assert_ne!(Value::Null, Value::Int(0));
        assert_ne!(Value::Null, Value::Text(String::new()));
    }

    #[test]
    fn test_same_type_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_eq!(Value::Text("same".into()), Value::Text("same".into()));
        assert_ne!(Value::Text("same".into()), Value::Text("other".into()));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Int(7).type_name(), "Int");
        assert_eq!(Value::Text("x".into()).type_name(), "Text");
    }

    #[test]
    fn test_sql_literal_rendering() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Text("post content".into()).to_string(), "'post content'");
    }

    #[test]
    fn test_sql_literal_escapes_quotes() {
        let v = Value::Text("it's".into());
        assert_eq!(v.to_string(), "'it''s'");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from("t"), Value::Text("t".into()));
        assert_eq!(Value::from(RecordId::new(9)), Value::Int(9));
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("t")), Value::Text("t".into()));
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Value::Text("same".into());
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
