//! # passgen
//!
//! Password generator with strength estimation and a local, bounded history.
//!
//! ## Features
//!
//! - Uniform generation from a cryptographically strong RNG over four
//!   character classes
//! - Heuristic strength score and brute-force crack-time estimate
//! - History capped at 100 entries, swept of entries older than 24 hours
//! - SQLite or in-memory key-value persistence
//! - English and Polish labels
//!
//! ## Example
//!
//! ```no_run
//! use passgen::{Config, Session, SqliteStore};
//! use std::path::Path;
//!
//! let store = SqliteStore::open(Path::new("/path/to/passgen.db")).unwrap();
//! let mut session = Session::start(&Config::default(), store);
//!
//! session.set_length(20);
//! if let Some(record) = session.generate() {
//!     println!("{} ({:?})", record.password, record.strength);
//! }
//! for record in session.history().records() {
//!     println!("{}: {}", record.id, record.password);
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod localization;
pub mod session;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use error::{PassgenError, Result};
pub use generator::{
    CharClass, CrackTime, PasswordGenerator, Policy, Strength, Summary, entropy_bits,
    estimate_crack_time, generate_password, score,
};
pub use history::{HistoryStore, PasswordRecord};
pub use localization::Translations;
pub use session::{Clipboard, CopyFeedback, Intent, Session, Surface, View};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 1;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 50;

/// Maximum number of history records kept
pub const HISTORY_CAPACITY: usize = 100;

/// Records older than this are swept from history (24 hours)
pub const HISTORY_MAX_AGE_MS: i64 = 86_400_000;

/// Interval between history sweeps (1 hour)
pub const SWEEP_INTERVAL_MS: i64 = 3_600_000;

/// How long copy feedback stays visible
pub const COPY_FEEDBACK_MS: i64 = 2_000;

/// Key the history list is stored under
pub const HISTORY_KEY: &str = "passwords";

/// Default database filename
pub const DATABASE_FILENAME: &str = "passgen.db";
