//! Clock abstraction for server-assigned timestamps.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time, used when stamping `created_at` on appended
/// entries and when defaulting a missing event `datetime`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Controllable clock for tests.
#[derive(Debug)]
pub struct MockClock {
    now: RwLock<DateTime<Utc>>,
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

impl MockClock {
    pub fn with_time(time: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(time),
        }
    }

    pub fn new() -> Self {
        Self::with_time(Utc::now())
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.write().unwrap();
        *now = *now + duration;
    }

    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.now.write().unwrap() = time;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}
