//! SQLite schema for the key-value store

/// SQL to create the key-value table
pub const CREATE_STORE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS passgen_store (
    key              VARCHAR PRIMARY KEY NOT NULL,
    value            TEXT NOT NULL,
    change_timestamp TEXT
)
"#;

/// Upsert a value, refreshing its change timestamp
pub const UPSERT_VALUE: &str = r#"
INSERT INTO passgen_store (key, value, change_timestamp)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
    value = excluded.value,
    change_timestamp = excluded.change_timestamp
"#;

pub const SELECT_VALUE: &str = "SELECT value FROM passgen_store WHERE key = ?1";

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[CREATE_STORE_TABLE];
