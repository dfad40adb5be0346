//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into the filesystem and the clock.

pub mod outbound;

pub use outbound::{Clock, NoteSlot, NoteStore};
