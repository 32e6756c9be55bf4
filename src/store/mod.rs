//! Typed key-value store.
//!
//! [`TypedKvStore`] persists dynamically typed values into a flat string
//! store. For every value it writes the value's type tag to a sibling key
//! (the storage key with the configured type suffix appended), and uses that
//! tag on read to reconstruct the original type.

mod error;
mod keys;

pub use error::StoreError;
pub use keys::KeyArg;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::backend::{StringStore, shared_session};
use crate::codec;
use crate::config::StoreConfig;
use crate::logging;
use crate::value::Value;

/// Typed key-value store over a flat string backing store.
///
/// All logical keys are namespaced with the prefix given at construction;
/// the prefix is fixed for the lifetime of the instance. A store without a
/// backing store (see [`TypedKvStore::detached`]) is inert: writes and
/// removals are no-ops and reads return `None`.
pub struct TypedKvStore {
    key_prefix: String,
    type_suffix: String,
    backend: Option<Arc<dyn StringStore>>,
}

impl TypedKvStore {
    /// Creates a store over a caller-supplied backend, with the default key
    /// layout.
    pub fn new(prefix: &str, backend: Arc<dyn StringStore>) -> Self {
        Self::with_config(prefix, backend, &StoreConfig::default())
    }

    /// Creates a store over a caller-supplied backend with an explicit key
    /// layout.
    pub fn with_config(prefix: &str, backend: Arc<dyn StringStore>, config: &StoreConfig) -> Self {
        Self {
            key_prefix: format!("{}{}", prefix, config.prefix_separator),
            type_suffix: config.type_suffix.clone(),
            backend: Some(backend),
        }
    }

    /// Creates a session-scoped store over the process-wide in-memory map.
    pub fn session(prefix: &str) -> Self {
        Self::new(prefix, shared_session())
    }

    /// Creates a persistent store at `path`.
    ///
    /// When the backing database cannot be opened the store silently
    /// degrades to an inert shell instead of erroring; use
    /// [`TypedKvStore::is_available`] to detect this.
    #[cfg(feature = "persistent")]
    pub fn persistent(prefix: &str, path: &std::path::Path) -> Self {
        match crate::backend::FjallStore::open(path) {
            Ok(backend) => {
                logging::info!(path = %path.display(), prefix = prefix, "opened persistent store");
                Self::new(prefix, Arc::new(backend))
            }
            Err(error) => {
                logging::warn!(
                    path = %path.display(),
                    error = %error,
                    "backing store unavailable, store is inert"
                );
                Self::detached_with_config(prefix, &StoreConfig::default())
            }
        }
    }

    /// Creates an inert store: writes are dropped, reads return `None`.
    pub fn detached(prefix: &str) -> Self {
        Self::detached_with_config(prefix, &StoreConfig::default())
    }

    fn detached_with_config(prefix: &str, config: &StoreConfig) -> Self {
        Self {
            key_prefix: format!("{}{}", prefix, config.prefix_separator),
            type_suffix: config.type_suffix.clone(),
            backend: None,
        }
    }

    /// Returns `true` when a backing store is attached.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Stores a single value under `key`.
    ///
    /// The type tag is written first, then the serialized value, so an
    /// interruption between the two leaves a tag without a value, never a
    /// value without a tag.
    pub fn set_item(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        let storage_key = self.storage_key(key);
        let tag = codec::classify(value);
        backend.set(&self.type_tag_key(&storage_key), &tag)?;
        let serialized = codec::serialize(value, &tag)?;
        backend.set(&storage_key, &serialized)?;
        logging::debug!(key = key, tag = %tag, "set item");
        Ok(())
    }

    /// Reads a single value.
    ///
    /// The stored type tag selects the parser; an absent tag, or a tag with
    /// no registered parser, yields the raw string. Returns `None` when the
    /// key was never set.
    pub fn get_item(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let Some(backend) = &self.backend else {
            return Ok(None);
        };
        let storage_key = self.storage_key(key);
        let tag = backend.get(&self.type_tag_key(&storage_key))?;
        let Some(raw) = backend.get(&storage_key)? else {
            return Ok(None);
        };
        let value = codec::parse(&raw, tag.as_deref())?;
        Ok(Some(value))
    }

    /// Removes a value and its type tag. Removing an absent key is a no-op.
    pub fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        let storage_key = self.storage_key(key);
        backend.remove(&storage_key)?;
        backend.remove(&self.type_tag_key(&storage_key))?;
        logging::debug!(key = key, "removed item");
        Ok(())
    }

    /// Stores multiple key/value pairs.
    ///
    /// Pairs are written independently: there is no atomicity across the
    /// batch, and a failure partway through leaves earlier pairs committed.
    pub fn set_many(&self, entries: &[(&str, Value)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Stores key/value pairs given as a flat alternating list:
    /// `[key, value, key, value, ...]`.
    ///
    /// The list shape is validated before anything is written: an odd number
    /// of elements, or a non-string in a key position, fails with
    /// [`StoreError::InvalidArguments`] and performs no writes.
    pub fn set_flat(&self, args: &[Value]) -> Result<(), StoreError> {
        if args.len() % 2 != 0 {
            return Err(StoreError::InvalidArguments(
                "flat set takes an even number of arguments: key, value, ...".to_string(),
            ));
        }
        let mut pairs = Vec::with_capacity(args.len() / 2);
        for pair in args.chunks_exact(2) {
            let (Some(Value::Str(key)), Some(value)) = (pair.first(), pair.get(1)) else {
                let got = pair.first().map(Value::type_name).unwrap_or("missing");
                return Err(StoreError::InvalidArguments(format!(
                    "flat set keys must be strings, got {}",
                    got
                )));
            };
            pairs.push((key.as_str(), value));
        }
        for (key, value) in pairs {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Reads every key named by `keys`, flattening nested lists first.
    ///
    /// The result maps each flattened logical key to its value; unknown keys
    /// map to `None`.
    pub fn get_many(&self, keys: &[KeyArg]) -> Result<BTreeMap<String, Option<Value>>, StoreError> {
        let mut items = BTreeMap::new();
        for key in keys::flatten(keys) {
            let value = self.get_item(&key)?;
            items.insert(key, value);
        }
        Ok(items)
    }

    /// Removes every key named by `keys`, flattening nested lists first.
    pub fn remove_many(&self, keys: &[KeyArg]) -> Result<(), StoreError> {
        for key in keys::flatten(keys) {
            self.remove_item(&key)?;
        }
        Ok(())
    }

    /// Lists the logical keys currently stored under this store's prefix.
    pub fn all_keys(&self) -> Result<Vec<String>, StoreError> {
        let Some(backend) = &self.backend else {
            return Ok(Vec::new());
        };
        let mut keys = Vec::new();
        for storage_key in backend.keys_with_prefix(&self.key_prefix)? {
            // Skip type tag entries
            if storage_key.ends_with(&self.type_suffix) {
                continue;
            }
            if let Some(key) = storage_key.strip_prefix(&self.key_prefix) {
                keys.push(key.to_string());
            }
        }
        Ok(keys)
    }

    /// Reads every stored item under this store's prefix as a key-to-value
    /// map.
    pub fn all_items(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        let mut items = BTreeMap::new();
        for key in self.all_keys()? {
            if let Some(value) = self.get_item(&key)? {
                items.insert(key, value);
            }
        }
        Ok(items)
    }

    /// Returns the fully prefixed storage key for a logical key.
    fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    /// Returns the key holding the type tag for a storage key.
    fn type_tag_key(&self, storage_key: &str) -> String {
        format!("{}{}", storage_key, self.type_suffix)
    }
}
