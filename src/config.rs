//! Runtime configuration
//!
//! Defaults come from the crate constants; `PASSGEN_DB`, `PASSGEN_LANG` and
//! `PASSGEN_LENGTH` override them.

use std::path::PathBuf;

use crate::error::{PassgenError, Result};
use crate::generator::Policy;
use crate::localization::{describe_languages, is_language_supported};
use crate::{
    COPY_FEEDBACK_MS, DATABASE_FILENAME, HISTORY_CAPACITY, HISTORY_KEY, HISTORY_MAX_AGE_MS,
    PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, SWEEP_INTERVAL_MS,
};

pub const ENV_DATABASE: &str = "PASSGEN_DB";
pub const ENV_LANGUAGE: &str = "PASSGEN_LANG";
pub const ENV_LENGTH: &str = "PASSGEN_LENGTH";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the history
    pub database_path: PathBuf,
    /// Language code for labels
    pub language: String,
    /// Policy a new session starts with
    pub default_policy: Policy,
    /// Key the history is stored under
    pub storage_key: String,
    pub history_capacity: usize,
    pub max_age_ms: i64,
    pub sweep_interval_ms: i64,
    /// How long copy feedback stays visible
    pub copy_feedback_ms: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DATABASE_FILENAME),
            language: "en".to_string(),
            default_policy: Policy::default(),
            storage_key: HISTORY_KEY.to_string(),
            history_capacity: HISTORY_CAPACITY,
            max_age_ms: HISTORY_MAX_AGE_MS,
            sweep_interval_ms: SWEEP_INTERVAL_MS,
            copy_feedback_ms: COPY_FEEDBACK_MS,
        }
    }
}

impl Config {
    /// Build from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATABASE).filter(|v| !v.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(lang) = lookup(ENV_LANGUAGE) {
            config.set_language(&lang)?;
        }

        if let Some(raw) = lookup(ENV_LENGTH) {
            let length = raw.trim().parse::<usize>().map_err(|e| {
                PassgenError::Config(format!("{} must be a number: {}", ENV_LENGTH, e))
            })?;
            config.set_length(length)?;
        }

        Ok(config)
    }

    /// Select a supported language
    pub fn set_language(&mut self, lang: &str) -> Result<()> {
        if !is_language_supported(lang) {
            return Err(PassgenError::Config(format!(
                "unsupported language '{}', expected one of: {}",
                lang,
                describe_languages()
            )));
        }
        self.language = lang.to_string();
        Ok(())
    }

    /// Set the default password length, rejecting values outside the range
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
            return Err(PassgenError::Config(format!(
                "length must be between {} and {}, got {}",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH, length
            )));
        }
        self.default_policy.set_length(length);
        Ok(())
    }
}
