//! Character-set policy for password generation

use serde::{Deserialize, Serialize};

use crate::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

pub const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/";

/// One of the four character classes a policy can enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    /// All classes, in pool order
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];

    /// The fixed character subset for this class
    pub fn symbols(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWER_LETTERS,
            CharClass::Uppercase => UPPER_LETTERS,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL_SYMBOLS,
        }
    }

    /// Number of characters in the subset
    pub fn size(self) -> usize {
        self.symbols().chars().count()
    }
}

/// Options for password generation
///
/// Fields are public so callers can describe any combination, including the
/// all-disabled one. Anything driven by user input goes through
/// [`Policy::normalized`] (or the setters), which keeps at least one class
/// enabled and the length inside `[1, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include special symbols (!@#$%...)
    pub special: bool,
    /// Password length
    pub length: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            special: false,
            length: 12,
        }
    }
}

impl Policy {
    /// Whether a class is enabled
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Special => self.special,
        }
    }

    /// Enabled classes in pool order
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    /// Enable or disable a class, then normalize
    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Special => &mut self.special,
        };
        *flag = enabled;
        self.normalize();
    }

    /// Flip a class, then normalize
    pub fn toggle(&mut self, class: CharClass) {
        let enabled = self.is_enabled(class);
        self.set_class(class, !enabled);
    }

    /// Set the length, clamped into the allowed range
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
        self.normalize();
    }

    /// Apply the policy invariant in place
    ///
    /// If every class is disabled, lowercase is force-enabled. Length is
    /// clamped to `[PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH]`.
    pub fn normalize(&mut self) {
        if !(self.lowercase || self.uppercase || self.digits || self.special) {
            self.lowercase = true;
        }
        self.length = self.length.clamp(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH);
    }

    /// Consuming form of [`Policy::normalize`]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Candidate pool: enabled subsets concatenated in class order
    pub fn pool(&self) -> Vec<char> {
        self.enabled_classes()
            .flat_map(|c| c.symbols().chars())
            .collect()
    }

    /// Sum of the enabled classes' subset sizes
    pub fn charset_size(&self) -> usize {
        self.enabled_classes().map(CharClass::size).sum()
    }
}
