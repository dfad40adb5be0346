//! Application use cases. Orchestrate domain logic via ports.

pub mod note_renderer;
pub mod note_service;

pub use note_renderer::{render_note, write_note};
pub use note_service::WeeklyNoteService;
