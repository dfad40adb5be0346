//! Note path derivation. `{year}/{MM}{Mon}/Week_of_the_{DDsuffix}.md`, relative to the notes root.

use super::calendar::day_with_suffix;
use super::entities::NoteLocation;
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

impl NoteLocation {
    /// Location of the note whose week starts on `day_one`.
    pub fn for_week_start(day_one: NaiveDate) -> Self {
        let dir = PathBuf::from(day_one.year().to_string()).join(format!(
            "{:02}{}",
            day_one.month(),
            day_one.format("%b")
        ));
        let file_name = format!("Week_of_the_{}.md", day_with_suffix(day_one.day()));
        Self { dir, file_name }
    }
}
