//! Record ID generation
//!
//! Record IDs are creation timestamps in milliseconds. Two records created
//! within the same millisecond would collide, so the sequence bumps an ID to
//! one past the previous one whenever the clock has not moved forward.

/// Monotonic millisecond ID source
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence that never issues an ID at or below `last`
    pub fn starting_after(last: i64) -> Self {
        Self { last: Some(last) }
    }

    /// Next ID for a record created at `now_ms`
    pub fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = match self.last {
            Some(last) if now_ms <= last => last.checked_add(1).unwrap_or(now_ms),
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }

    /// The most recently issued ID
    pub fn last(&self) -> Option<i64> {
        self.last
    }
}
