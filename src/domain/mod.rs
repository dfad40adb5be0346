//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod calendar;
pub mod entities;
pub mod errors;
pub mod paths;
pub mod todos;

pub use calendar::{compute_week, day_with_suffix, ordinal_suffix, previous_week_start};
pub use entities::{NoteLocation, NoteOutcome, TodoLine, WEEK_LEN, WeekWindow};
pub use errors::DomainError;
pub use todos::{TODO_MARKER, extract_todos};
