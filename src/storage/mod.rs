//! Key/value storage for extension data.
//!
//! Stash records and the stash index are stored as JSON strings under string
//! keys. The SQLite-backed [`crate::database::Database`] persists across
//! restarts; [`MemoryStore`] is discarded on drop.

pub mod memory;

pub use memory::MemoryStore;

use crate::types::errors::StoreError;

/// A synchronous, string-keyed persistent map scoped to the extension.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
