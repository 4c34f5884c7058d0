use chrono::Utc;

/// Source of "now" for catalog timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock time.
    #[default]
    System,
    /// A fixed instant, in epoch seconds.
    Fixed(i64),
}

impl Clock {
    /// Current time in whole epoch seconds.
    pub fn now_secs(&self) -> i64 {
        match self {
            Clock::System => Utc::now().timestamp(),
            Clock::Fixed(secs) => *secs,
        }
    }

    /// Move a fixed clock forward. No effect on the system clock.
    pub fn advance(&mut self, secs: i64) {
        if let Clock::Fixed(t) = self {
            *t += secs;
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;
