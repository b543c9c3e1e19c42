//! Wall-clock sources for the greeting

use chrono::{Local, Timelike};
use std::sync::atomic::{AtomicU32, Ordering};

/// Supplies the current local hour, `0..=23`.
pub trait Clock: Send + Sync {
    fn hour(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a given hour. The hour can be moved with [`FixedClock::set_hour`],
/// which lets ticker tests simulate the day passing.
#[derive(Debug, Default)]
pub struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    pub fn new(hour: u32) -> Self {
        Self {
            hour: AtomicU32::new(hour),
        }
    }

    pub fn set_hour(&self, hour: u32) {
        self.hour.store(hour, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour.load(Ordering::SeqCst)
    }
}
