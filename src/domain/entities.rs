//! Domain entities. Pure data structures for the core business.
//!
//! No filesystem handles here; adapters deal with those.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// Number of weekdays covered by one note.
pub const WEEK_LEN: usize = 5;

/// Monday through Friday of one calendar week, in rendering order.
///
/// Only built by [`WeekWindow::containing`](crate::domain::calendar), so the first day is
/// always a Monday and the days are contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub(crate) days: [NaiveDate; WEEK_LEN],
}

impl WeekWindow {
    /// The Monday that anchors the window. Used for the note path and the heading.
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[WEEK_LEN - 1]
    }

    pub fn days(&self) -> &[NaiveDate; WEEK_LEN] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

/// One unfinished checklist entry carried over from a previous note. Holds the trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLine(pub(crate) String);

impl TodoLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a week's note lives, relative to the notes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLocation {
    /// `{year}/{MM}{Mon}`, e.g. `2023/02Feb`.
    pub dir: PathBuf,
    /// `Week_of_the_{DDsuffix}.md`, e.g. `Week_of_the_20th.md`.
    pub file_name: String,
}

impl NoteLocation {
    /// Relative path of the note file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Same location re-rooted under `root`.
    pub fn under(&self, root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(&self.dir),
            file_name: self.file_name.clone(),
        }
    }
}

/// Result of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// A new note was written at this path.
    Created(PathBuf),
    /// The note for this week was already on disk; nothing was touched.
    AlreadyExists(PathBuf),
}

impl NoteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            NoteOutcome::Created(p) | NoteOutcome::AlreadyExists(p) => p,
        }
    }
}
