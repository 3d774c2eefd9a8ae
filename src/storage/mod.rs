//! Durable key-value stores behind the [`Repository`] trait.

pub mod error;
pub mod json;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
pub mod repository;


pub use error::{StorageError, StorageResult};
pub use json::JsonFileStore;
#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryStore;
pub use repository::Repository;
