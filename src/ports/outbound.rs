//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NoteLocation};
use chrono::{DateTime, FixedOffset};
use std::io::Write;
use std::path::PathBuf;

/// Result of asking the store for a week's note.
pub enum NoteSlot {
    /// The note did not exist; it has been created empty and `writer` points at it.
    Created {
        path: PathBuf,
        writer: Box<dyn Write>,
    },
    /// The note is already on disk. The caller must not write anything.
    AlreadyExists { path: PathBuf },
}

impl std::fmt::Debug for NoteSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteSlot::Created { path, .. } => f.debug_struct("Created").field("path", path).finish(),
            NoteSlot::AlreadyExists { path } => {
                f.debug_struct("AlreadyExists").field("path", path).finish()
            }
        }
    }
}

/// Note storage. Locations are relative; the store decides the root.
pub trait NoteStore {
    /// Make sure the note's directory exists and create the note if it is missing.
    ///
    /// - Directory missing: created (with parents), then the note is created.
    /// - Directory unreadable for any other reason: `DomainError::ListDir`.
    /// - Note already listed in the directory: `NoteSlot::AlreadyExists`, not an error.
    fn ensure_note(&self, location: &NoteLocation) -> Result<NoteSlot, DomainError>;

    /// Full text of an existing note. Missing files map to `ReadNote { not_found: true, .. }`.
    fn read_note(&self, location: &NoteLocation) -> Result<String, DomainError>;
}

/// Source of "now". Keeps the wall clock out of the core.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}
