//! Typed key-value storage with type preservation.
//!
//! Values stored through [`TypedKvStore`] keep their runtime type across the
//! storage round trip: the store writes each value's type tag to a sibling
//! key and uses that tag to pick the matching parser on read. The backing
//! store is any flat string-to-string map implementing [`StringStore`].
//!
//! # Quick Start
//!
//! ```ignore
//! use tag_kv::prelude::*;
//!
//! // Session-scoped store over the shared in-memory map
//! let store = TypedKvStore::session("app");
//!
//! // Values come back with their original type
//! store.set_item("year", &Value::from(2014))?;
//! let year = store.get_item("year")?;   // Some(Value::Num(2014.0))
//! ```
//!
//! # Modules
//!
//! - [`value`] - The dynamic value model
//! - [`codec`] - Type classification, registry and (de)serialization
//! - [`backend`] - Backing store contract and implementations
//! - [`store`] - The typed key-value store
//! - [`config`] - Key layout configuration
//!
//! # Feature Flags
//!
//! - `persistent` - Enable the fjall-backed persistent store (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

pub mod backend;
pub mod codec;
pub mod config;
mod logging;
pub mod prelude;
pub mod store;
pub mod value;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export core types at crate root for convenience
pub use backend::{BackendError, MemoryStore, StringStore};
pub use codec::{CodecError, Parser, Serializer, register_data_type};
pub use config::{ConfigError, StoreConfig};
pub use store::{KeyArg, StoreError, TypedKvStore};
pub use value::Value;

#[cfg(feature = "persistent")]
pub use backend::FjallStore;
