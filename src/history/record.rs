//! Generated password record

use serde::{Deserialize, Serialize};

use crate::generator::{CrackTime, Strength};

/// One generated password as kept in history
///
/// `id` is the creation time in milliseconds and doubles as the record key.
/// Records stored before `length` and `crackTime` existed load with
/// `length == 0` and `crack_time == NoData`; [`PasswordRecord::repair`]
/// derives the length from the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRecord {
    pub password: String,
    pub strength: Strength,
    pub id: i64,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub crack_time: CrackTime,
}

impl PasswordRecord {
    /// Milliseconds elapsed between creation and `now_ms`
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.id)
    }

    /// Fill in fields missing from older stored records
    pub fn repair(&mut self) {
        if self.length == 0 {
            self.length = self.password.chars().count();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let record = PasswordRecord {
            password: "Abcdefgh1".to_string(),
            strength: Strength::Medium,
            id: 1_700_000_000_000,
            length: 9,
            crack_time: CrackTime::Hours,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["password"], "Abcdefgh1");
        assert_eq!(json["strength"], 2);
        assert_eq!(json["id"], 1_700_000_000_000i64);
        assert_eq!(json["length"], 9);
        assert_eq!(json["crackTime"], "hours");
    }

    #[test]
    fn test_legacy_record_loads() {
        let json = r#"{"password":"hasło123","strength":2,"id":1700000000000}"#;
        let mut record: PasswordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.length, 0);
        assert_eq!(record.crack_time, CrackTime::NoData);

        record.repair();
        assert_eq!(record.length, 8);
    }

    #[test]
    fn test_age() {
        let record = PasswordRecord {
            password: "x".to_string(),
            strength: Strength::VeryWeak,
            id: 1_000,
            length: 1,
            crack_time: CrackTime::Seconds,
        };
        assert_eq!(record.age_ms(4_000), 3_000);
        assert_eq!(record.age_ms(500), -500);
    }
}
