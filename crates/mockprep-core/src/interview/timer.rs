//! Interview countdown.

use serde::{Deserialize, Serialize};

const WARNING_BELOW_SECS: u64 = 300;
const DANGER_BELOW_SECS: u64 = 120;

/// How close the countdown is to running out. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Danger,
}

impl Urgency {
    pub fn from_remaining(secs: u64) -> Self {
        if secs < DANGER_BELOW_SECS {
            Urgency::Danger
        } else if secs < WARNING_BELOW_SECS {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// Outcome of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time left after the decrement.
    Running(u64),
    /// This tick reached zero. Reported exactly once per countdown.
    Expired,
    /// The countdown already expired on an earlier tick.
    Idle,
}

/// Seconds remaining in an attempt, counting down to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    expired: bool,
}

impl Countdown {
    pub fn new(budget_secs: u64) -> Self {
        Self {
            remaining: budget_secs,
            expired: false,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_remaining(self.remaining)
    }

    /// Advances the countdown by one second, clamping at zero.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Idle;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.expired = true;
            return Tick::Expired;
        }
        self.remaining -= 1;
        Tick::Running(self.remaining)
    }
}

/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_boundaries() {
        assert_eq!(Urgency::from_remaining(2700), Urgency::Normal);
        assert_eq!(Urgency::from_remaining(300), Urgency::Normal);
        assert_eq!(Urgency::from_remaining(299), Urgency::Warning);
        assert_eq!(Urgency::from_remaining(120), Urgency::Warning);
        assert_eq!(Urgency::from_remaining(119), Urgency::Danger);
        assert_eq!(Urgency::from_remaining(0), Urgency::Danger);
    }

    #[test]
    fn test_tick_decrements() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.remaining(), 1);
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_expiry_is_reported_once() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_zero_budget_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(2700), "45:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }
}
