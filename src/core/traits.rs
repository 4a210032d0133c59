//! Core traits
//!
//! Seams that let the shop run against the real system or against test
//! doubles.

use chrono::{Local, NaiveDateTime};

/// Source of timestamps for the sales log
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
