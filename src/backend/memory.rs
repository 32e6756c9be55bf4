//! In-memory backing store.

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::{BackendError, StringStore};

/// An in-memory string store.
///
/// Backs session-scoped stores (through the process-wide [`shared_session`]
/// instance) and is the natural backend for tests and ephemeral data.
///
/// # Thread Safety
///
/// The store is thread-safe and can be shared across threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns a copy of all entries.
    ///
    /// Useful for inspecting the exact wire layout in tests.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.read().clone()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, BackendError> {
        let entries = self.entries.read();
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

static SESSION_STORE: Lazy<Arc<MemoryStore>> = Lazy::new(|| Arc::new(MemoryStore::new()));

/// The process-wide session store.
///
/// Every session-scoped [`crate::TypedKvStore`] shares this map, the way all
/// session-storage users share one map; prefixes keep their keyspaces apart.
pub fn shared_session() -> Arc<MemoryStore> {
    Arc::clone(&SESSION_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn memory_set_then_get() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b").unwrap(), None);
    }

    #[test]
    fn memory_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        store.remove("a").unwrap();
    }

    #[test]
    fn memory_keys_with_prefix_filters() {
        let store = MemoryStore::new();
        store.set("app/a", "1").unwrap();
        store.set("app/b", "2").unwrap();
        store.set("other/c", "3").unwrap();

        let keys = store.keys_with_prefix("app/").unwrap();
        assert_eq!(keys, vec!["app/a".to_string(), "app/b".to_string()]);
    }

    #[test]
    fn memory_clear_removes_everything() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn shared_session_is_one_map() {
        let first = shared_session();
        let second = shared_session();
        first.set("shared-session-probe", "x").unwrap();
        assert_eq!(
            second.get("shared-session-probe").unwrap(),
            Some("x".to_string())
        );
        first.remove("shared-session-probe").unwrap();
    }
}
