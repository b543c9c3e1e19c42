//! Time-of-day greeting
//!
//! The label is a pure function of the wall-clock hour. [`GreetingTicker`]
//! recomputes it on a fixed period for the lifetime of a TUI session.

mod clock;
mod ticker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ticker::{GreetingTicker, DEFAULT_REFRESH_INTERVAL};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    pub fn label(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
            Greeting::Night => "Good Night",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an hour of the day to its greeting.
///
/// Ranges are half-open: `[5,12)` morning, `[12,17)` afternoon, `[17,21)`
/// evening, everything else night. Hours past 23 wrap around.
pub fn compute_greeting(hour: u32) -> Greeting {
    match hour % 24 {
        5..=11 => Greeting::Morning,
        12..=16 => Greeting::Afternoon,
        17..=20 => Greeting::Evening,
        _ => Greeting::Night,
    }
}

/// Greeting for whatever hour `clock` reports right now.
pub fn current_greeting(clock: &dyn Clock) -> Greeting {
    compute_greeting(clock.hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_range() {
        for hour in 5..12 {
            assert_eq!(compute_greeting(hour), Greeting::Morning, "hour {hour}");
        }
    }

    #[test]
    fn test_afternoon_range() {
        for hour in 12..17 {
            assert_eq!(compute_greeting(hour), Greeting::Afternoon, "hour {hour}");
        }
    }

    #[test]
    fn test_evening_range() {
        for hour in 17..21 {
            assert_eq!(compute_greeting(hour), Greeting::Evening, "hour {hour}");
        }
    }

    #[test]
    fn test_night_wraps_midnight() {
        for hour in (21..24).chain(0..5) {
            assert_eq!(compute_greeting(hour), Greeting::Night, "hour {hour}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(compute_greeting(4).label(), "Good Night");
        assert_eq!(compute_greeting(5).label(), "Good Morning");
        assert_eq!(compute_greeting(11).label(), "Good Morning");
        assert_eq!(compute_greeting(12).label(), "Good Afternoon");
        assert_eq!(compute_greeting(16).label(), "Good Afternoon");
        assert_eq!(compute_greeting(17).label(), "Good Evening");
        assert_eq!(compute_greeting(20).label(), "Good Evening");
        assert_eq!(compute_greeting(21).label(), "Good Night");
        assert_eq!(compute_greeting(23).label(), "Good Night");
    }

    #[test]
    fn test_out_of_range_hour_wraps() {
        assert_eq!(compute_greeting(24), Greeting::Night);
        assert_eq!(compute_greeting(24 + 9), Greeting::Morning);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Greeting::Evening.to_string(), "Good Evening");
    }

    #[test]
    fn test_current_greeting_uses_clock() {
        let clock = FixedClock::new(13);
        assert_eq!(current_greeting(&clock), Greeting::Afternoon);
    }
}
