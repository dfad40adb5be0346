//! Implements NoteStore on the local filesystem.
//! Notes live under a root directory: {root}/{year}/{MMMon}/Week_of_the_{DDsuffix}.md.
//! Existing notes are never opened for writing.

use crate::domain::{DomainError, NoteLocation};
use crate::ports::{NoteSlot, NoteStore};
use std::fs;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Permissions for directories created by the store (owner rwx, group rx).
#[cfg(unix)]
const DIR_MODE: u32 = 0o750;

/// File-system note store rooted at `root`.
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Lists `dir` looking for `file_name`. A missing directory is created and reported as empty.
    fn dir_contains(dir: &Path, file_name: &str) -> Result<bool, DomainError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Self::create_dir(dir)?;
                debug!(path = %dir.display(), "created note directory");
                return Ok(false);
            }
            Err(e) => {
                return Err(DomainError::ListDir {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };
        for entry in entries {
            let entry = entry.map_err(|e| DomainError::ListDir {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })?;
            if entry.file_name() == file_name {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn create_dir(dir: &Path) -> Result<(), DomainError> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(dir).map_err(|e| DomainError::CreateDir {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Creates the note file. `create_new` closes the gap between the listing and the create.
    fn create_note(path: PathBuf) -> Result<NoteSlot, DomainError> {
        let file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(NoteSlot::AlreadyExists { path });
            }
            Err(e) => {
                return Err(DomainError::CreateFile {
                    path,
                    reason: e.to_string(),
                });
            }
        };
        debug!(path = %path.display(), "created note file");

        Ok(NoteSlot::Created {
            path,
            writer: Box::new(BufWriter::new(file)),
        })
    }
}

impl NoteStore for FsNoteStore {
    fn ensure_note(&self, location: &NoteLocation) -> Result<NoteSlot, DomainError> {
        let rooted = location.under(&self.root);
        let path = rooted.path();

        if Self::dir_contains(&rooted.dir, &rooted.file_name)? {
            return Ok(NoteSlot::AlreadyExists { path });
        }

        Self::create_note(path)
    }

    fn read_note(&self, location: &NoteLocation) -> Result<String, DomainError> {
        let path = location.under(&self.root).path();
        fs::read_to_string(&path).map_err(|e| DomainError::ReadNote {
            not_found: e.kind() == ErrorKind::NotFound,
            reason: e.to_string(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn feb_20() -> NoteLocation {
        NoteLocation::for_week_start(NaiveDate::from_ymd_opt(2023, 2, 20).unwrap())
    }

    #[test]
    fn test_ensure_note_creates_missing_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsNoteStore::new(tmp.path());

        let (path, mut writer) = match store.ensure_note(&feb_20()).unwrap() {
            NoteSlot::Created { path, writer } => (path, writer),
            other => panic!("expected a fresh note, got {:?}", other),
        };
        writer.write_all(b"hello").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(path, tmp.path().join("2023/02Feb/Week_of_the_20th.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_ensure_note_reports_existing_file_without_touching_it() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2023/02Feb");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Week_of_the_20th.md"), "keep me").unwrap();

        let store = FsNoteStore::new(tmp.path());
        let slot = store.ensure_note(&feb_20()).unwrap();
        assert!(matches!(slot, NoteSlot::AlreadyExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.join("Week_of_the_20th.md")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_ensure_note_in_existing_directory_with_other_notes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2023/02Feb");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Week_of_the_13th.md"), "older").unwrap();

        let store = FsNoteStore::new(tmp.path());
        let slot = store.ensure_note(&feb_20()).unwrap();
        assert!(matches!(slot, NoteSlot::Created { .. }));
        assert!(dir.join("Week_of_the_20th.md").exists());
    }

    #[test]
    fn test_ensure_note_fails_when_month_dir_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("2023")).unwrap();
        fs::write(tmp.path().join("2023/02Feb"), "not a directory").unwrap();

        let store = FsNoteStore::new(tmp.path());
        let err = store.ensure_note(&feb_20()).unwrap_err();
        assert!(matches!(err, DomainError::ListDir { .. }), "got {:?}", err);
    }

    #[test]
    #[cfg(unix)]
    fn test_ensure_note_fails_when_directory_cannot_be_created() {
        let tmp = tempfile::tempdir().unwrap();
        // Dangling symlink: listing the month dir reports NotFound, creating the year dir fails.
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("2023")).unwrap();

        let store = FsNoteStore::new(tmp.path());
        let err = store.ensure_note(&feb_20()).unwrap_err();
        assert!(matches!(err, DomainError::CreateDir { .. }), "got {:?}", err);
    }

    #[test]
    fn test_create_note_failure_is_create_file_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing-dir").join("Week_of_the_20th.md");

        let err = FsNoteStore::create_note(path.clone()).unwrap_err();
        match err {
            DomainError::CreateFile { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected CreateFile, got {:?}", other),
        }
    }

    #[test]
    fn test_create_note_existing_file_is_already_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Week_of_the_20th.md");
        fs::write(&path, "raced").unwrap();

        let slot = FsNoteStore::create_note(path.clone()).unwrap();
        assert!(matches!(slot, NoteSlot::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(path).unwrap(), "raced");
    }

    #[test]
    fn test_read_note_missing_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsNoteStore::new(tmp.path());
        match store.read_note(&feb_20()) {
            Err(DomainError::ReadNote { not_found, .. }) => assert!(not_found),
            other => panic!("expected ReadNote error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_note_returns_text() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2023/02Feb");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Week_of_the_20th.md"), "- [ ] a\n").unwrap();

        let store = FsNoteStore::new(tmp.path());
        assert_eq!(store.read_note(&feb_20()).unwrap(), "- [ ] a\n");
    }
}
