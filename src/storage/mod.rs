//! Key-value persistence for history
//!
//! The history store writes one JSON document under one key. Any backend
//! that can read and write a string by key will do:
//! - `SqliteStore` keeps values in a single SQLite table
//! - `MemoryStore` keeps them in a `HashMap` for the lifetime of the process

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// String key-value slot storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
