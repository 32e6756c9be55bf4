//! Dynamic value model for typed storage.
//!
//! [`Value`] covers the runtime shapes the store can persist while keeping
//! the original type across the storage round trip. JSON containers keep
//! their `serde_json` representation; dates, regexp literals and function
//! sources carry enough structure to be reconstructed on read.

use std::fmt;

use chrono::{DateTime, Utc};

/// A dynamically typed value as handled by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Double precision, so integers are exact up to 2^53.
    Num(f64),
    /// A string.
    Str(String),
    /// An array of JSON values.
    Array(Vec<serde_json::Value>),
    /// A plain object, kept as a JSON map.
    Object(serde_json::Map<String, serde_json::Value>),
    /// A point in time, stored in RFC 3339 form.
    Date(DateTime<Utc>),
    /// A regular expression literal: pattern plus flags.
    Regexp {
        /// The pattern between the slashes.
        pattern: String,
        /// The trailing flags (`i`, `g`, ...).
        flags: String,
    },
    /// A function, kept as its source text.
    Func(String),
    /// An instance of a custom type: class name plus its data.
    ///
    /// Register a serializer/parser for the class name (or an alias) with
    /// [`crate::codec::register_data_type`] to control how instances are
    /// stored and reconstructed.
    Custom {
        /// The class name, used as the natural type name.
        class: String,
        /// The instance data.
        data: serde_json::Value,
    },
}

impl Value {
    /// The natural type name used as classification input: the primitive
    /// type name for primitives, the class name for everything else.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Num(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Date(_) => "Date",
            Value::Regexp { .. } => "RegExp",
            Value::Func(_) => "function",
            Value::Custom { class, .. } => class,
        }
    }

    /// Returns the string content for string values, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a `Value` from a parsed JSON tree.
    ///
    /// Containers keep their JSON representation; scalars map to the
    /// matching primitive variant. Numbers outside f64 range (large u64/i64)
    /// lose precision the same way they would in a double-based runtime.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Num(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::Array(items),
            serde_json::Value::Object(map) => Value::Object(map),
        }
    }
}

impl fmt::Display for Value {
    /// The default string conversion, used by the serialization fallback for
    /// types without a registered serializer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Num(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                let json = serde_json::to_string(items).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Value::Object(map) => {
                let json = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Value::Date(dt) => f.write_str(&dt.to_rfc3339()),
            Value::Regexp { pattern, flags } => write!(f, "/{}/{}", pattern, flags),
            Value::Func(source) => f.write_str(source),
            Value::Custom { data, .. } => {
                let json = serde_json::to_string(data).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(json)
    }
}
