//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem and clock. Map errors to DomainError.

pub mod clock;
pub mod persistence;

pub use clock::{FixedClock, SystemClock};
pub use persistence::FsNoteStore;
