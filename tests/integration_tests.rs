//! Integration tests for passgen
//!
//! These tests run the session and history store against an on-disk SQLite
//! store in a temporary directory.

use std::path::{Path, PathBuf};

use passgen::generator::policy::SPECIAL_SYMBOLS;
use passgen::{
    CharClass, Config, CrackTime, HistoryStore, KeyValueStore, MemoryStore, PasswordGenerator,
    PasswordRecord, Policy, Session, SqliteStore, Strength, estimate_crack_time, score,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

const T0: i64 = 1_700_000_000_000;
const HOUR_MS: i64 = 3_600_000;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("passgen.db")
}

fn open_session(path: &Path, seed: u64, now_ms: i64) -> Session<SqliteStore, StdRng> {
    let store = SqliteStore::open(path).expect("Failed to open store");
    let generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(seed));
    Session::open_with(&Config::default(), store, generator, now_ms)
}

fn all_policies() -> Vec<Policy> {
    let mut policies = Vec::new();
    for mask in 1u8..16 {
        policies.push(Policy {
            lowercase: mask & 1 != 0,
            uppercase: mask & 2 != 0,
            digits: mask & 4 != 0,
            special: mask & 8 != 0,
            length: 12,
        });
    }
    policies
}

#[test]
fn test_generated_passwords_match_policy() {
    let mut generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(11));

    for base in all_policies() {
        for length in [1, 7, 8, 12, 20, 50] {
            let policy = Policy { length, ..base };
            let record = generator.generate_at(&policy, T0).unwrap();

            assert_eq!(record.password.chars().count(), length);
            assert_eq!(record.length, length);
            assert!(record.password.chars().all(|c| {
                (policy.lowercase && c.is_ascii_lowercase())
                    || (policy.uppercase && c.is_ascii_uppercase())
                    || (policy.digits && c.is_ascii_digit())
                    || (policy.special && SPECIAL_SYMBOLS.contains(c))
            }));
            assert_eq!(record.strength, score(&record.password));
            assert_eq!(
                record.crack_time,
                estimate_crack_time(&record.password, &policy)
            );
        }
    }
}

#[test]
fn test_empty_policy_yields_empty_result() {
    let mut generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(1));
    let policy = Policy {
        lowercase: false,
        uppercase: false,
        digits: false,
        special: false,
        length: 12,
    };
    assert!(generator.generate_at(&policy, T0).is_none());
    assert_eq!(score(""), Strength::VeryWeak);
}

#[test]
fn test_strength_examples() {
    assert_eq!(score(""), Strength::VeryWeak);
    assert_eq!(score("abcdefgh"), Strength::Weak);
    assert_eq!(score("Abcdefgh1"), Strength::Medium);
    assert_eq!(score("Abcdefgh1!@#$%^&*()"), Strength::Strong);
}

#[test]
fn test_crack_time_monotonic() {
    for policy in all_policies() {
        let mut previous = CrackTime::NoData;
        for length in 1..=50 {
            let current = estimate_crack_time(&"a".repeat(length), &policy);
            assert!(current >= previous);
            previous = current;
        }
    }

    for length in 1..=50 {
        let password = "a".repeat(length);
        let mut policy = Policy {
            lowercase: true,
            uppercase: false,
            digits: false,
            special: false,
            length,
        };
        let mut previous = estimate_crack_time(&password, &policy);
        for class in [CharClass::Uppercase, CharClass::Digits, CharClass::Special] {
            policy.set_class(class, true);
            let current = estimate_crack_time(&password, &policy);
            assert!(current >= previous);
            previous = current;
        }
    }
}

#[test]
fn test_history_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    let expected: Vec<PasswordRecord> = {
        let mut session = open_session(&path, 5, T0);
        for i in 0..5 {
            session.generate_at(T0 + i);
        }
        session.history().records().to_vec()
    };
    assert_eq!(expected.len(), 5);
    assert_eq!(expected[0].id, T0 + 4);

    let session = open_session(&path, 6, T0);
    assert_eq!(session.history().records(), expected.as_slice());
}

#[test]
fn test_history_cap_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    {
        let mut session = open_session(&path, 7, T0);
        for i in 0..101 {
            session.generate_at(T0 + i);
        }
        assert_eq!(session.history().len(), 100);
    }

    let session = open_session(&path, 8, T0);
    let records = session.history().records();
    assert_eq!(records.len(), 100);
    assert_eq!(records[0].id, T0 + 100);
    assert_eq!(records[99].id, T0 + 1);
    assert!(records.windows(2).all(|w| w[0].id > w[1].id));
}

#[test]
fn test_remove_and_clear_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    let removed_id = {
        let mut session = open_session(&path, 9, T0);
        session.generate_at(T0);
        session.generate_at(T0 + 1);
        session.generate_at(T0 + 2);
        assert_eq!(session.remove(T0 + 1), 1);
        T0 + 1
    };

    {
        let mut session = open_session(&path, 10, T0);
        let ids: Vec<_> = session.history().records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![T0 + 2, T0]);
        assert!(session.history().get(removed_id).is_none());
        session.clear_history();
    }

    let session = open_session(&path, 11, T0);
    assert!(session.history().is_empty());
}

#[test]
fn test_sweep_persists() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    {
        let mut session = open_session(&path, 12, T0);
        session.generate_at(T0 - 25 * HOUR_MS);
        session.generate_at(T0 - 23 * HOUR_MS);
        assert_eq!(session.tick(T0 + HOUR_MS), 1);
    }

    let session = open_session(&path, 13, T0);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().records()[0].id, T0 - 23 * HOUR_MS);
}

#[test]
fn test_malformed_store_loads_empty_and_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set("passwords", "this is not json").unwrap();
    }

    {
        let mut session = open_session(&path, 14, T0);
        assert!(session.history().is_empty());
        session.generate_at(T0);
    }

    let session = open_session(&path, 15, T0);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_legacy_history_format() {
    let mut store = MemoryStore::new();
    store
        .set(
            "passwords",
            r#"[{"password":"Qw3rty!x","strength":3,"id":1700000000000}]"#,
        )
        .unwrap();

    let history = HistoryStore::load(store);
    let record = &history.records()[0];
    assert_eq!(record.password, "Qw3rty!x");
    assert_eq!(record.strength, Strength::Strong);
    assert_eq!(record.length, 8);
    assert_eq!(record.crack_time, CrackTime::NoData);
}

#[test]
fn test_stored_json_shape() {
    let mut session = Session::open_with(
        &Config::default(),
        MemoryStore::new(),
        PasswordGenerator::with_rng(StdRng::seed_from_u64(16)),
        T0,
    );
    session.generate_at(T0);

    let json = session.history().store().get("passwords").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entry = &value[0];
    assert_eq!(entry["id"], T0);
    assert_eq!(entry["length"], 12);
    assert!(entry["password"].is_string());
    assert!(entry["strength"].is_u64());
    assert_eq!(entry["crackTime"], "many years");
}
