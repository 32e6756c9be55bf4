//! Error types for the store module.

use thiserror::Error;

use crate::backend::BackendError;
use crate::codec::CodecError;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bulk flat set called with a malformed argument list.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
