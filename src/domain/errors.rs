//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Listing the note directory failed for a reason other than "not found".
    #[error("error reading directory {path}: {reason}")]
    ListDir { path: PathBuf, reason: String },

    #[error("error creating directory {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },

    #[error("error creating note {path}: {reason}")]
    CreateFile { path: PathBuf, reason: String },

    /// Reading a previous note failed. `not_found` is set from `ErrorKind::NotFound`.
    #[error("error reading note {path}: {reason}")]
    ReadNote {
        path: PathBuf,
        reason: String,
        not_found: bool,
    },

    #[error("error writing note from template: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
