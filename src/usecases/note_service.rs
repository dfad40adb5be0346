//! Weekly note generation. Orchestrates clock, store and renderer.
//!
//! One run: compute this week's window, create the note if it is missing,
//! carry over last week's unchecked TODOs, write the note.

use super::note_renderer::write_note;
use crate::domain::{
    DomainError, NoteLocation, NoteOutcome, TodoLine, compute_week, extract_todos,
    previous_week_start,
};
use crate::ports::{Clock, NoteSlot, NoteStore};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service that creates the current week's note.
pub struct WeeklyNoteService {
    store: Arc<dyn NoteStore>,
    clock: Arc<dyn Clock>,
}

impl WeeklyNoteService {
    pub fn new(store: Arc<dyn NoteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create this week's note unless it already exists.
    ///
    /// Rerunning in the same week returns `AlreadyExists` and touches nothing.
    /// Directory, creation and write failures are returned as errors; a failed write
    /// may leave a partial note on disk.
    pub fn generate(&self) -> Result<NoteOutcome, DomainError> {
        let now = self.clock.now();
        let window = compute_week(&now);
        let location = NoteLocation::for_week_start(window.first());
        debug!(
            %now,
            first = %window.first(),
            last = %window.last(),
            path = %location.path().display(),
            "computed week window"
        );

        match self.store.ensure_note(&location)? {
            NoteSlot::AlreadyExists { path } => {
                info!(path = %path.display(), "note already exists, nothing to do");
                Ok(NoteOutcome::AlreadyExists(path))
            }
            NoteSlot::Created { path, mut writer } => {
                let todos = self.collect_carryover(window.first());
                write_note(&mut *writer, &window, &todos)?;
                info!(
                    path = %path.display(),
                    todos = todos.len(),
                    "weekly note created"
                );
                Ok(NoteOutcome::Created(path))
            }
        }
    }

    /// Unchecked TODOs from the note of the week before `day_one`.
    ///
    /// Never fails: an unreadable or missing note yields an empty list and a warning.
    pub fn collect_carryover(&self, day_one: NaiveDate) -> Vec<TodoLine> {
        let previous = NoteLocation::for_week_start(previous_week_start(day_one));
        match self.store.read_note(&previous) {
            Ok(text) => {
                let todos = extract_todos(&text);
                debug!(
                    path = %previous.path().display(),
                    count = todos.len(),
                    "carried over TODOs from last week"
                );
                todos
            }
            Err(DomainError::ReadNote {
                path,
                not_found: true,
                ..
            }) => {
                warn!(path = %path.display(), "no note from last week, nothing to carry over");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "error getting TODOs from last week");
                Vec::new()
            }
        }
    }
}
