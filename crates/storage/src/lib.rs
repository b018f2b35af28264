//! Storage abstraction and implementations for fitlog.
//!
//! This crate provides a trait-based backend interface with a flat text
//! file implementation, plus the [`LogStore`] that owns the in-memory log
//! and flushes it on every mutation.

#![warn(missing_docs)]

pub mod trait_;
pub mod text_storage;
pub mod memory_storage;
pub mod log_store;

pub use trait_::{decode_lines, LoadReport, LogBackend, Result, StorageError};
pub use text_storage::TextFileStorage;
pub use memory_storage::MemoryStorage;
pub use log_store::LogStore;
