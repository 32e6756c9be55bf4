//! Unified error type for the tag-kv library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::backend::BackendError;
use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// Unified error type for all tag-kv operations.
///
/// This enum wraps all module-specific error types, allowing callers to
/// use a single error type throughout their application.
///
/// # Example
///
/// ```ignore
/// use tag_kv::{Result, TypedKvStore, Value};
///
/// fn do_something() -> Result<()> {
///     let store = TypedKvStore::session("app");
///     store.set_item("year", &Value::from(2014))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the serialization codec.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Error from the backing store.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Error from store operations.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a codec error.
    pub fn is_codec(&self) -> bool {
        matches!(self, Self::Codec(_))
    }

    /// Returns `true` if this is a backing store error.
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// Returns `true` if this is a store operation error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
