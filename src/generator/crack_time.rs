//! Brute-force crack-time and entropy estimation

use serde::{Deserialize, Serialize};

use super::policy::Policy;

/// Assumed attacker throughput
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
const DECADE: f64 = 315_360_000.0;

/// Coarse crack-time bucket
///
/// Variants are ordered by duration; `NoData` sorts first and is only
/// produced for an empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum CrackTime {
    #[default]
    #[serde(rename = "no data")]
    NoData,
    #[serde(rename = "seconds")]
    Seconds,
    #[serde(rename = "minutes")]
    Minutes,
    #[serde(rename = "hours")]
    Hours,
    #[serde(rename = "days")]
    Days,
    #[serde(rename = "months")]
    Months,
    #[serde(rename = "years")]
    Years,
    #[serde(rename = "many years")]
    ManyYears,
}

impl CrackTime {
    /// Bucket for a duration in seconds
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < MINUTE {
            CrackTime::Seconds
        } else if seconds < HOUR {
            CrackTime::Minutes
        } else if seconds < DAY {
            CrackTime::Hours
        } else if seconds < MONTH {
            CrackTime::Days
        } else if seconds < YEAR {
            CrackTime::Months
        } else if seconds < DECADE {
            CrackTime::Years
        } else {
            CrackTime::ManyYears
        }
    }

    /// Stored label, as written to history
    pub fn label(self) -> &'static str {
        match self {
            CrackTime::NoData => "no data",
            CrackTime::Seconds => "seconds",
            CrackTime::Minutes => "minutes",
            CrackTime::Hours => "hours",
            CrackTime::Days => "days",
            CrackTime::Months => "months",
            CrackTime::Years => "years",
            CrackTime::ManyYears => "many years",
        }
    }

    /// Translation key for this bucket
    pub fn label_key(self) -> &'static str {
        match self {
            CrackTime::NoData => "crack_no_data",
            CrackTime::Seconds => "crack_seconds",
            CrackTime::Minutes => "crack_minutes",
            CrackTime::Hours => "crack_hours",
            CrackTime::Days => "crack_days",
            CrackTime::Months => "crack_months",
            CrackTime::Years => "crack_years",
            CrackTime::ManyYears => "crack_many_years",
        }
    }
}

impl std::fmt::Display for CrackTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Crack-time and entropy shown next to the current password
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub crack_time: CrackTime,
    pub entropy_bits: f64,
}

impl Summary {
    /// Summary for `password` under `policy`
    pub fn new(password: &str, policy: &Policy) -> Self {
        Self {
            crack_time: estimate_crack_time(password, policy),
            entropy_bits: entropy_bits(policy),
        }
    }
}

/// Seconds needed to exhaust `charset_size ^ length` guesses
pub fn seconds_to_crack(charset_size: usize, length: usize) -> f64 {
    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    (charset_size as f64).powi(exponent) / GUESSES_PER_SECOND
}

/// Estimate how long a brute-force search takes
///
/// The search space uses the charset of `policy`, which is the policy in
/// effect when the estimate is shown, not necessarily the one the password
/// was drawn from.
pub fn estimate_crack_time(password: &str, policy: &Policy) -> CrackTime {
    if password.is_empty() {
        return CrackTime::NoData;
    }
    let length = password.chars().count();
    CrackTime::from_seconds(seconds_to_crack(policy.charset_size(), length))
}

/// Per-character entropy of the policy's charset, in bits
///
/// This is `log2(charset)`, not `length * log2(charset)`; the displayed
/// figure has always been per character.
pub fn entropy_bits(policy: &Policy) -> f64 {
    match policy.charset_size() {
        0 => 0.0,
        n => (n as f64).log2(),
    }
}
