//! Plain text note files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;

use super::NoteSource;

/// Reads the whole file as the note.
#[derive(Debug, Clone)]
pub struct TextFileNoteSource {
    path: PathBuf,
    fallback: Option<String>,
}

impl TextFileNoteSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fallback: None,
        }
    }

    /// Use `note` when the file does not exist.
    pub fn with_fallback(mut self, note: impl Into<String>) -> Self {
        self.fallback = Some(note.into());
        self
    }
}

impl NoteSource for TextFileNoteSource {
    fn read_note(&self) -> Result<Option<String>, SourceError> {
        if !self.path.exists() {
            if let Some(fallback) = &self.fallback {
                debug!("Note file {} not found, using fallback note", self.path.display());
                return Ok(Some(fallback.clone()));
            }
        }

        debug!("Reading physician note from file: {}", self.path.display());
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "Patient needs a CPAP.\nDr. Cameron.\n").unwrap();

        let note = TextFileNoteSource::new(&path).read_note().unwrap();
        assert_eq!(note.as_deref(), Some("Patient needs a CPAP.\nDr. Cameron.\n"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = TextFileNoteSource::new(&path).read_note().unwrap_err();
        assert!(matches!(err, SourceError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn test_fallback_only_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "from file").unwrap();

        let note = TextFileNoteSource::new(&path)
            .with_fallback("from fallback")
            .read_note()
            .unwrap();
        assert_eq!(note.as_deref(), Some("from file"));
    }
}
