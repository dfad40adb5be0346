//! Week window and ordinal-day arithmetic. Pure functions of their inputs.

use super::entities::WeekWindow;
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

impl WeekWindow {
    /// Monday..Friday of the ISO week containing `date`.
    ///
    /// Saturday and Sunday belong to the week that started on the preceding Monday.
    pub fn containing(date: NaiveDate) -> Self {
        let back = u64::from(date.weekday().num_days_from_monday());
        let monday = date - Days::new(back);
        let days = std::array::from_fn(|i| monday + Days::new(i as u64));
        Self { days }
    }
}

/// Week window for an instant. Time of day (and therefore timezone offset within the day) is ignored.
pub fn compute_week<Tz: TimeZone>(now: &DateTime<Tz>) -> WeekWindow {
    WeekWindow::containing(now.date_naive())
}

/// First day of the week before the one starting at `day_one`.
pub fn previous_week_start(day_one: NaiveDate) -> NaiveDate {
    day_one - Days::new(7)
}

/// English ordinal suffix for a day of month.
///
/// Teens need no special case: only 1, 21 and 31 take "st", so 11 falls through to "th".
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Zero-padded day with its suffix: `1` -> `"01st"`.
pub fn day_with_suffix(day: u32) -> String {
    format!("{:02}{}", day, ordinal_suffix(day))
}
