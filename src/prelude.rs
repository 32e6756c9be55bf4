//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use tag_kv::prelude::*;
//!
//! let store = TypedKvStore::session("app");
//! store.set_item("year", &Value::from(2014))?;
//! let year = store.get_item("year")?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Value model
pub use crate::value::Value;

// Codec types and the registration entry point
pub use crate::codec::{CodecError, Parser, Serializer, register_data_type};

// Backing store contract
#[cfg(feature = "persistent")]
pub use crate::backend::FjallStore;
pub use crate::backend::{BackendError, MemoryStore, StringStore};

// Store types
pub use crate::store::{KeyArg, StoreError, TypedKvStore};

// Configuration
pub use crate::config::{ConfigError, StoreConfig};
