//! Password generation functionality

use rand::CryptoRng;

use super::crack_time::estimate_crack_time;
use super::policy::Policy;
use super::strength::score;
use crate::history::PasswordRecord;
use crate::utils::{IdSequence, now_millis};

/// Draw a random password for the given policy.
///
/// Each character is picked by reducing a 32-bit word from `rng` modulo the
/// pool size. The pool holds at most 89 characters, so the modulo bias is
/// below one part in 10^7 per draw; that is accepted rather than corrected
/// with rejection sampling.
///
/// Returns an empty string when the policy enables no class.
///
/// # Example
/// ```
/// use passgen::generator::{generate_password, Policy};
///
/// let policy = Policy {
///     lowercase: true,
///     uppercase: true,
///     digits: true,
///     special: false,
///     length: 12,
/// };
/// let password = generate_password(&policy, &mut rand::rng());
/// assert_eq!(password.len(), 12);
/// ```
pub fn generate_password<R: CryptoRng + ?Sized>(policy: &Policy, rng: &mut R) -> String {
    let pool = policy.pool();
    if pool.is_empty() {
        return String::new();
    }

    let pool_size = pool.len() as u32;
    (0..policy.length)
        .map(|_| pool[(rng.next_u32() % pool_size) as usize])
        .collect()
}

/// Build a history record for a password drawn under `policy`
pub fn build_record(password: String, policy: &Policy, id: i64) -> PasswordRecord {
    PasswordRecord {
        strength: score(&password),
        crack_time: estimate_crack_time(&password, policy),
        length: password.chars().count(),
        password,
        id,
    }
}

/// Password generator owning its random source and ID sequence
pub struct PasswordGenerator<R> {
    rng: R,
    ids: IdSequence,
}

impl PasswordGenerator<rand::rngs::ThreadRng> {
    /// Generator backed by the thread-local CSPRNG
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PasswordGenerator<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng> PasswordGenerator<R> {
    /// Generator backed by a caller-supplied CSPRNG
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            ids: IdSequence::new(),
        }
    }

    /// Continue the ID sequence after a stored record created at `last`
    ///
    /// A stamp ahead of `now_ms` is ignored so that IDs keep tracking the
    /// clock and records still age out of history.
    pub fn resume_after(&mut self, last: i64, now_ms: i64) {
        if last > now_ms {
            log::warn!("Ignoring history id {} ahead of the clock ({})", last, now_ms);
            return;
        }
        if self.ids.last().is_none_or(|current| current < last) {
            self.ids = IdSequence::starting_after(last);
        }
    }

    /// Generate one record stamped with `now_ms`
    ///
    /// Returns `None` when the policy's pool is empty.
    pub fn generate_at(&mut self, policy: &Policy, now_ms: i64) -> Option<PasswordRecord> {
        let password = generate_password(policy, &mut self.rng);
        if password.is_empty() {
            log::debug!("Empty character pool, nothing generated");
            return None;
        }

        let id = self.ids.next_at(now_ms);
        let record = build_record(password, policy, id);
        log::debug!(
            "Generated password id={} length={} strength={:?}",
            record.id,
            record.length,
            record.strength
        );
        Some(record)
    }

    /// Generate one record stamped with the current time
    pub fn generate(&mut self, policy: &Policy) -> Option<PasswordRecord> {
        self.generate_at(policy, now_millis())
    }
}
