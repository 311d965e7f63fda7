//! SQLite-backed key-value store

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::KeyValueStore;
use super::schema;
use crate::error::{PassgenError, Result};

/// Timestamp format used for `change_timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Key-value store kept in one SQLite table
pub struct SqliteStore {
    /// Path to the database file, `None` for in-memory databases
    path: Option<PathBuf>,
    /// SQLite connection
    conn: Option<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) a store at the specified path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        log::debug!("Opened store at {}", path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Some(conn),
        })
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self {
            path: None,
            conn: Some(conn),
        })
    }

    fn init(conn: &Connection) -> Result<()> {
        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }
        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| PassgenError::Storage("Store not open".to_string()))
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if the store is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .connection()?
            .query_row(schema::SELECT_VALUE, params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        self.connection()?
            .execute(schema::UPSERT_VALUE, params![key, value, now])?;
        Ok(())
    }
}

impl Drop for SqliteStore {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("passwords").unwrap(), None);
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("passwords", "[]").unwrap();
        assert_eq!(store.get("passwords").unwrap().as_deref(), Some("[]"));

        store.set("passwords", "[1]").unwrap();
        assert_eq!(store.get("passwords").unwrap().as_deref(), Some("[1]"));

        let count: i64 = store
            .connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM passgen_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("passgen.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            assert_eq!(store.path(), Some(db_path.as_path()));
            store.set("passwords", "[\"x\"]").unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("passwords").unwrap().as_deref(), Some("[\"x\"]"));
    }

    #[test]
    fn test_closed_store_errors() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.close();
        assert!(!store.is_open());
        assert!(matches!(store.get("a"), Err(PassgenError::Storage(_))));
        assert!(store.set("a", "1").is_err());
    }
}
