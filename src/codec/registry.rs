//! Process-wide data type registry.
//!
//! The registry maps a type tag to its serializer and parser, and a value's
//! natural type name to the tag actually stored (aliasing lets a custom type
//! be persisted under its own name or a shared simpler tag). Built-in entries
//! are loaded on first use; [`register_data_type`] is the sole extension
//! point and entries are never removed.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::value::Value;

use super::builtins;
use super::error::CodecError;

/// Serializer callback: value to stored string.
pub type Serializer = Arc<dyn Fn(&Value) -> Result<String, CodecError> + Send + Sync>;

/// Parser callback: stored string back to a value.
pub type Parser = Arc<dyn Fn(&str) -> Result<Value, CodecError> + Send + Sync>;

#[derive(Default)]
pub(crate) struct Registry {
    pub(crate) serializers: HashMap<String, Serializer>,
    pub(crate) parsers: HashMap<String, Parser>,
    pub(crate) aliases: HashMap<String, String>,
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
    let mut registry = Registry::default();
    builtins::install(&mut registry);
    RwLock::new(registry)
});

/// Determines the stored type tag for a value: its natural type name, unless
/// a registered alias overrides it.
pub fn classify(value: &Value) -> String {
    let natural = value.type_name();
    let registry = REGISTRY.read();
    registry
        .aliases
        .get(natural)
        .cloned()
        .unwrap_or_else(|| natural.to_string())
}

/// Serializes a value under the given tag.
///
/// Uses the registered serializer when one exists; otherwise plain JSON
/// containers are JSON-encoded and every other value falls back to its
/// string conversion.
pub fn serialize(value: &Value, tag: &str) -> Result<String, CodecError> {
    // Clone the Arc so user callbacks never run under the registry lock.
    let serializer = REGISTRY.read().serializers.get(tag).cloned();
    match serializer {
        Some(serializer) => serializer(value),
        None => default_serialize(value),
    }
}

fn default_serialize(value: &Value) -> Result<String, CodecError> {
    match value {
        Value::Array(items) => Ok(serde_json::to_string(items)?),
        Value::Object(map) => Ok(serde_json::to_string(map)?),
        Value::Custom { data, .. } => Ok(serde_json::to_string(data)?),
        other => Ok(other.to_string()),
    }
}

/// Parses a stored string using the tag's registered parser.
///
/// An absent tag, or a tag with no registered parser, yields the raw string
/// unchanged as a string value.
pub fn parse(raw: &str, tag: Option<&str>) -> Result<Value, CodecError> {
    let parser = match tag {
        Some(tag) => REGISTRY.read().parsers.get(tag).cloned(),
        None => None,
    };
    match parser {
        Some(parser) => parser(raw),
        None => Ok(Value::Str(raw.to_string())),
    }
}

/// Registers a data type for storage.
///
/// Installs `serializer` and `parser` for `tag` when provided, overwriting
/// any prior registration for that tag, and records `store_as` (the tag
/// itself by default) as the alias used by classification whenever a value's
/// natural type name equals `tag`. There is no removal operation: the
/// registry only grows.
pub fn register_data_type(
    tag: &str,
    serializer: Option<Serializer>,
    parser: Option<Parser>,
    store_as: Option<&str>,
) {
    let mut registry = REGISTRY.write();
    if let Some(serializer) = serializer {
        registry.serializers.insert(tag.to_string(), serializer);
    }
    if let Some(parser) = parser {
        registry.parsers.insert(tag.to_string(), parser);
    }
    let stored = store_as.unwrap_or(tag);
    registry
        .aliases
        .insert(tag.to_string(), stored.to_string());
}
