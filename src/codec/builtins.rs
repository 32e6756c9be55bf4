//! Built-in serializers and parsers.
//!
//! Arrays get an explicit JSON serializer; every other built-in type is
//! covered by the default fallback on the way in. On the way out, parsers
//! reconstruct objects, arrays, dates, booleans, numbers, function sources
//! and regexp literals. Tags without a parser come back as raw strings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

use super::error::CodecError;
use super::registry::{Parser, Registry, Serializer};

/// Stored regexp literal form: `/pattern/flags`.
static REGEXP_LITERAL: Lazy<Regex> = Lazy::new(|| {
    // This expect is acceptable because the pattern is a compile-time
    // constant. If it fails to compile, it's a bug in this file, not a
    // runtime error.
    #[allow(clippy::expect_used)]
    Regex::new(r"^/(.*)/([gimy]*)$").expect("invalid built-in regexp literal pattern")
});

pub(crate) fn install(registry: &mut Registry) {
    registry
        .serializers
        .insert("Array".to_string(), json_serializer());

    registry.parsers.insert("Object".to_string(), json_parser());
    registry.parsers.insert("Array".to_string(), json_parser());
    registry.parsers.insert("Date".to_string(), date_parser());
    registry
        .parsers
        .insert("boolean".to_string(), boolean_parser());
    registry
        .parsers
        .insert("number".to_string(), number_parser());
    registry
        .parsers
        .insert("function".to_string(), function_parser());
    registry
        .parsers
        .insert("RegExp".to_string(), regexp_parser());
}

fn json_serializer() -> Serializer {
    Arc::new(|value| match value {
        Value::Array(items) => Ok(serde_json::to_string(items)?),
        Value::Object(map) => Ok(serde_json::to_string(map)?),
        other => Ok(other.to_string()),
    })
}

fn json_parser() -> Parser {
    Arc::new(|raw| Ok(Value::from_json(serde_json::from_str(raw)?)))
}

fn date_parser() -> Parser {
    Arc::new(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Value::Date(dt.with_timezone(&Utc)))
            .map_err(|e| CodecError::InvalidDate(format!("{}: {}", raw, e)))
    })
}

fn boolean_parser() -> Parser {
    Arc::new(|raw| Ok(Value::Bool(raw == "true")))
}

fn number_parser() -> Parser {
    Arc::new(|raw| {
        raw.parse::<f64>()
            .map(Value::Num)
            .map_err(|_| CodecError::InvalidNumber(raw.to_string()))
    })
}

fn function_parser() -> Parser {
    Arc::new(|raw| Ok(Value::Func(raw.to_string())))
}

fn regexp_parser() -> Parser {
    Arc::new(|raw| {
        let captures = REGEXP_LITERAL
            .captures(raw)
            .ok_or_else(|| CodecError::InvalidRegexp(raw.to_string()))?;
        let pattern = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let flags = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        Ok(Value::Regexp {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
        })
    })
}
