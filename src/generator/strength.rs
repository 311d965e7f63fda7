//! Heuristic password strength scoring

use serde::{Deserialize, Serialize};

use crate::error::PassgenError;

/// Strength bucket, stored as an integer 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Strength {
    /// Empty or very weak
    #[default]
    VeryWeak = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
}

impl Strength {
    /// Translation key for this bucket
    pub fn label_key(self) -> &'static str {
        match self {
            Strength::VeryWeak => "strength_very_weak",
            Strength::Weak => "strength_weak",
            Strength::Medium => "strength_medium",
            Strength::Strong => "strength_strong",
        }
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength as u8
    }
}

impl TryFrom<u8> for Strength {
    type Error = PassgenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Strength::VeryWeak),
            1 => Ok(Strength::Weak),
            2 => Ok(Strength::Medium),
            3 => Ok(Strength::Strong),
            other => Err(PassgenError::Serialization(format!(
                "strength out of range: {}",
                other
            ))),
        }
    }
}

/// Raw points before bucketing
///
/// Length gives +2 from 12 characters (+1 from 8), each character class
/// present gives +1, and 20 or more characters give one more point.
pub fn raw_score(password: &str) -> u32 {
    let length = password.chars().count();
    let mut score = 0;

    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    if length >= 20 {
        score += 1;
    }

    score
}

/// Score a password into one of four strength buckets
pub fn score(password: &str) -> Strength {
    match raw_score(password) {
        s if s >= 6 => Strength::Strong,
        s if s >= 4 => Strength::Medium,
        s if s >= 2 => Strength::Weak,
        _ => Strength::VeryWeak,
    }
}
