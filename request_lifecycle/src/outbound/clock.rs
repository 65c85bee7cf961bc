//! Implementation of the Clock using system time.

use chrono::{DateTime, Utc};

use crate::domain::port::Clock;

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
