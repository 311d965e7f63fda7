//! Poll-driven recurring timer for history sweeps

/// Fires once per interval when polled; inert after [`SweepTimer::cancel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepTimer {
    interval_ms: i64,
    next_due: Option<i64>,
}

impl SweepTimer {
    /// Unarmed timer with the given interval
    pub fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    /// Schedule the first firing one interval after `now_ms`
    pub fn arm(&mut self, now_ms: i64) {
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Consume a due firing, rescheduling one interval after `now_ms`
    ///
    /// Missed intervals are not replayed: however late the poll, the timer
    /// fires once.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.next_due {
            Some(due) if now_ms >= due => {
                self.arm(now_ms);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<i64> {
        self.next_due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_never_fires() {
        let mut timer = SweepTimer::new(10);
        assert!(!timer.is_active());
        assert!(!timer.poll(1_000));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = SweepTimer::new(10);
        timer.arm(0);
        assert_eq!(timer.next_due(), Some(10));
        assert!(!timer.poll(9));
        assert!(timer.poll(10));
        assert!(!timer.poll(15));
        assert!(timer.poll(20));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut timer = SweepTimer::new(10);
        timer.arm(0);
        assert!(timer.poll(95));
        assert!(!timer.poll(100));
        assert_eq!(timer.next_due(), Some(105));
    }

    #[test]
    fn test_cancel() {
        let mut timer = SweepTimer::new(10);
        timer.arm(0);
        timer.cancel();
        assert!(!timer.is_active());
        assert!(!timer.poll(100));
    }
}
