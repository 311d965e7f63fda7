//! Localization and translation support
//!
//! Labels for the surface, strength buckets and crack-time buckets, embedded
//! at compile time. English is always loaded as the fallback.

use std::collections::HashMap;

use crate::error::{PassgenError, Result};
use crate::generator::{CrackTime, Strength};

/// Supported languages as (code, name in that language)
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("pl", "Polski")];

const LANG_EN: &str = include_str!("languages/en.json");
const LANG_PL: &str = include_str!("languages/pl.json");

/// Get the embedded JSON for a language code
fn get_language_json(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(LANG_EN),
        "pl" => Some(LANG_PL),
        _ => None,
    }
}

/// Check if a language code is supported
pub fn is_language_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang)
}

/// Supported languages formatted for messages, e.g. `en (English), pl (Polski)`
pub fn describe_languages() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{} ({})", code, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Translation manager
pub struct Translations {
    /// Current language code
    current_lang: String,
    /// Current language strings
    strings: HashMap<String, String>,
    /// English strings (fallback)
    english: HashMap<String, String>,
}

impl Translations {
    /// Create a new translations instance with English as default
    pub fn new() -> Result<Self> {
        let english = Self::load_language("en")?;
        Ok(Self {
            current_lang: "en".to_string(),
            strings: english.clone(),
            english,
        })
    }

    /// Create a translations instance for `lang`
    pub fn for_language(lang: &str) -> Result<Self> {
        let mut tr = Self::new()?;
        tr.set_language(lang)?;
        Ok(tr)
    }

    /// Load a language from embedded JSON
    fn load_language(lang: &str) -> Result<HashMap<String, String>> {
        let json = get_language_json(lang)
            .ok_or_else(|| PassgenError::Localization(format!("Language '{}' not found", lang)))?;

        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);

        serde_json::from_str(json).map_err(|e| {
            PassgenError::Localization(format!("Failed to parse language '{}': {}", lang, e))
        })
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) -> Result<()> {
        if !is_language_supported(lang) {
            return Err(PassgenError::Localization(format!(
                "Language '{}' is not supported",
                lang
            )));
        }

        self.strings = Self::load_language(lang)?;
        self.current_lang = lang.to_string();
        Ok(())
    }

    /// Get a translated string by key
    /// Returns the key itself if not found
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Get a translated string, returning None if not found
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
    }

    /// Label for a strength bucket
    pub fn strength(&self, strength: Strength) -> &str {
        self.get(strength.label_key())
    }

    /// Label for a crack-time bucket
    pub fn crack_time(&self, crack_time: CrackTime) -> &str {
        self.get(crack_time.label_key())
    }

    /// Get the current language code
    pub fn get_language(&self) -> &str {
        &self.current_lang
    }
}
