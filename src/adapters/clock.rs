//! Clock adapters. Implement the Clock port.

use crate::ports::Clock;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to midnight UTC of one date. Used for WEEKLY_NOTES_DATE overrides and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0.and_time(NaiveTime::MIN).and_utc().fixed_offset()
    }
}
