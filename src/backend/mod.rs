//! Backing store contract and implementations.
//!
//! The store persists into any flat, synchronous string-to-string map
//! implementing [`StringStore`]. [`MemoryStore`] covers session-scoped data
//! and tests; [`FjallStore`] (feature `persistent`) covers on-disk data.

use thiserror::Error;

mod memory;
#[cfg(feature = "persistent")]
mod persistent;

pub use self::memory::{MemoryStore, shared_session};
#[cfg(feature = "persistent")]
pub use self::persistent::FjallStore;

/// A flat string-to-string backing store.
///
/// Keys and values are exact strings; writes are last-write-wins and there
/// are no transactions. Implementations serialize concurrent access within
/// the process.
pub trait StringStore: Send + Sync {
    /// Reads the value stored at `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Stores `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Removes the value at `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), BackendError>;

    /// Lists every key starting with `prefix`.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, BackendError>;
}

/// Errors surfaced by a backing store.
#[derive(Error, Debug)]
pub enum BackendError {
    #[cfg(feature = "persistent")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Stored value at '{key}' is not valid UTF-8")]
    CorruptValue { key: String },
}
