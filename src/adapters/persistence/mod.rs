//! Persistence adapters. Notes on the local filesystem.

pub mod fs_notes;

pub use fs_notes::FsNoteStore;
