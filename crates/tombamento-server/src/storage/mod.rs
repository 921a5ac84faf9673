//! Storage layer
//!
//! The whole store lives in one pretty-printed JSON file that is rewritten on
//! every mutation.

pub mod file;

pub use file::{JsonFileStore, StorageError};
