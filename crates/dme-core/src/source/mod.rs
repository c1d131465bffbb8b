//! Physician note sources.

mod json;
mod text;

pub use json::JsonNoteSource;
pub use text::TextFileNoteSource;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::models::config::SourceConfig;

/// Supplies the note text for one pipeline run.
pub trait NoteSource {
    /// Read the note. `Ok(None)` means no note is available.
    fn read_note(&self) -> Result<Option<String>, SourceError>;
}

/// Note given directly as a string.
#[derive(Debug, Clone)]
pub struct InlineNoteSource {
    note: String,
}

impl InlineNoteSource {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

impl NoteSource for InlineNoteSource {
    fn read_note(&self) -> Result<Option<String>, SourceError> {
        Ok(Some(self.note.clone()))
    }
}

/// On-disk note format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    /// Pick by file extension: `.json` is JSON, anything else is text.
    #[default]
    Auto,
    /// Whole file is the note.
    Text,
    /// JSON document with the note in a top-level field.
    Json,
}

impl NoteFormat {
    /// Resolve `Auto` against a path.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"));
                if is_json { Self::Json } else { Self::Text }
            }
            other => other,
        }
    }

    /// Open a note source for a file.
    pub fn open(self, path: &Path, config: &SourceConfig) -> Box<dyn NoteSource> {
        match self.resolve(path) {
            Self::Json => Box::new(JsonNoteSource::new(path).with_field(&config.data_field)),
            _ => {
                let source = TextFileNoteSource::new(path);
                match &config.fallback_note {
                    Some(note) => Box::new(source.with_fallback(note)),
                    None => Box::new(source),
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for NoteFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SourceError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
