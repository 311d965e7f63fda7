//! Common utility functions

use chrono::{DateTime, Local, TimeZone, Utc};

/// Date format for display
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in milliseconds since the epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a millisecond timestamp to a UTC datetime
pub fn datetime_from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

/// Format a millisecond timestamp in local time for display
pub fn format_millis(ms: i64) -> String {
    datetime_from_millis(ms)
        .map(|dt| dt.with_timezone(&Local).format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Convert a string to asterisks (for masking passwords)
pub fn mask_string(s: &str) -> String {
    "*".repeat(s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("password"), "********");
        assert_eq!(mask_string(""), "");
        assert_eq!(mask_string("hasło"), "*****");
    }

    #[test]
    fn test_datetime_from_millis() {
        let dt = datetime_from_millis(1_481_822_634_000).unwrap();
        assert_eq!(dt.year(), 2016);
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.day(), 15);
    }

    #[test]
    fn test_format_millis_out_of_range() {
        assert_eq!(format_millis(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_now_millis() {
        let before = Utc::now().timestamp_millis();
        let result = now_millis();
        let after = Utc::now().timestamp_millis();
        assert!(result >= before);
        assert!(result <= after);
    }
}
