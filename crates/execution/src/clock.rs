// Path: crates/execution/src/clock.rs
//! Time sources for the host runtime.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The host clock. Programs see its value through `TxContext::unix_timestamp`.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn unix_timestamp(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default()
    }
}

/// A manually driven clock for deterministic tests.
#[derive(Debug, Default)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    /// Creates a clock frozen at `timestamp`.
    pub fn new(timestamp: i64) -> Self {
        Self(AtomicI64::new(timestamp))
    }

    /// Moves the clock to `timestamp`.
    pub fn set(&self, timestamp: i64) {
        self.0.store(timestamp, Ordering::SeqCst);
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let clock = FixedClock::new(1_700_000_000);
        assert_eq!(clock.unix_timestamp(), 1_700_000_000);
        clock.advance(60);
        assert_eq!(clock.unix_timestamp(), 1_700_000_060);
        clock.set(5);
        assert_eq!(clock.unix_timestamp(), 5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.unix_timestamp() > 1_577_836_800);
    }
}
