//! Injected time source
//!
//! Every component that needs "now" or the hour of day takes a `Clock`
//! rather than reading the system time, so transitions stay deterministic
//! under test and replayable by callers.

use crate::core::types::{Timestamp, MS_PER_HOUR};
use chrono::Timelike;

/// Source of current time for event stamping and time-of-day rules
pub trait Clock {
    /// Current time as epoch milliseconds
    fn now_ms(&self) -> Timestamp;

    /// Local hour of day, 0-23
    fn hour_of_day(&self) -> u32;
}

/// Real wall-clock time
///
/// Hour of day is local time, matching what the player experiences: mons
/// get tired at the player's night, not at UTC's.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Timestamp {
        chrono::Utc::now().timestamp_millis()
    }

    fn hour_of_day(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Deterministic clock for tests and headless simulation runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_ms: Timestamp,
    hour: u32,
}

impl FixedClock {
    pub fn at(now_ms: Timestamp, hour: u32) -> Self {
        debug_assert!(hour < 24);
        Self { now_ms, hour }
    }

    /// Advance the clock, wrapping the hour of day
    pub fn advance_hours(&mut self, hours: u32) {
        self.now_ms += hours as Timestamp * MS_PER_HOUR;
        self.hour = (self.hour + hours) % 24;
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> Timestamp {
        self.now_ms
    }

    fn hour_of_day(&self) -> u32 {
        self.hour
    }
}
