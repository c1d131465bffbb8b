//! JSON note documents.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;

use super::NoteSource;

/// Reads the note from a top-level field of a JSON document.
#[derive(Debug, Clone)]
pub struct JsonNoteSource {
    path: PathBuf,
    field: String,
}

impl JsonNoteSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            field: "data".to_string(),
        }
    }

    /// Read the note from `field` instead of `data`.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

impl NoteSource for JsonNoteSource {
    fn read_note(&self) -> Result<Option<String>, SourceError> {
        debug!("Reading physician note from JSON file: {}", self.path.display());

        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let document: Value = serde_json::from_str(&content).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Non-string values are passed on as their JSON text.
        Ok(match document.get(&self.field) {
            None | Some(Value::Null) => None,
            Some(Value::String(note)) => Some(note.clone()),
            Some(other) => Some(other.to_string()),
        })
    }
}
