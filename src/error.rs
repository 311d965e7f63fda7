//! Error types for passgen

use thiserror::Error;

/// Main error type for generator, storage and session operations
#[derive(Error, Debug)]
pub enum PassgenError {
    /// Key-value store operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored history could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Clipboard refused the text
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Localization error
    #[error("Localization error: {0}")]
    Localization(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for PassgenError {
    fn from(err: rusqlite::Error) -> Self {
        PassgenError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PassgenError {
    fn from(err: serde_json::Error) -> Self {
        PassgenError::Serialization(err.to_string())
    }
}

/// Result type alias for passgen operations
pub type Result<T> = std::result::Result<T, PassgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PassgenError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");

        let err = PassgenError::Clipboard("denied".to_string());
        assert!(err.to_string().contains("denied"));

        let err = PassgenError::Config("PASSGEN_LENGTH".to_string());
        assert!(err.to_string().contains("PASSGEN_LENGTH"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let err: PassgenError = sqlite_err.into();
        match err {
            PassgenError::Storage(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Storage"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: PassgenError = json_err.into();
        match err {
            PassgenError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization"),
        }
    }
}
