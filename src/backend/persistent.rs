//! Fjall-backed persistent store.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use super::{BackendError, StringStore};

/// A persistent string store backed by fjall.
///
/// All entries live in a single data keyspace; every mutation is persisted
/// with `PersistMode::SyncAll` before returning.
pub struct FjallStore {
    db: fjall::Database,
    data: Keyspace,
}

impl FjallStore {
    /// Opens the store at the given path, creating it when absent.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let db = fjall::Database::builder(path).open()?;
        let data = db.keyspace("data", KeyspaceCreateOptions::default)?;
        Ok(Self { db, data })
    }
}

impl StringStore for FjallStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let Some(bytes) = self.data.get(key)? else {
            return Ok(None);
        };
        let value = std::str::from_utf8(bytes.as_ref())
            .map_err(|_| BackendError::CorruptValue {
                key: key.to_string(),
            })?;
        Ok(Some(value.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.data.insert(key, value.as_bytes())?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        self.data.remove(key)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, BackendError> {
        let mut keys = Vec::new();
        for kv in self.data.prefix(prefix) {
            let Ok(key_bytes) = kv.key() else {
                continue;
            };
            keys.push(String::from_utf8_lossy(&key_bytes).into_owned());
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fjall_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn fjall_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FjallStore::open(dir.path()).unwrap();
            store.set("kept", "value").unwrap();
        }
        let store = FjallStore::open(dir.path()).unwrap();
        assert_eq!(store.get("kept").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn fjall_keys_with_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        store.set("app/a", "1").unwrap();
        store.set("app/b", "2").unwrap();
        store.set("zzz/c", "3").unwrap();

        let mut keys = store.keys_with_prefix("app/").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["app/a".to_string(), "app/b".to_string()]);
    }
}
