//! Typed serialization codec.
//!
//! Classification turns a value into a type tag, the registry maps tags to
//! serializer/parser pairs, and [`register_data_type`] extends the set of
//! supported types at runtime.

mod builtins;
mod error;
mod registry;

pub use error::CodecError;
pub use registry::{Parser, Serializer, classify, parse, register_data_type, serialize};
