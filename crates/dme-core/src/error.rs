//! Error types for the dme-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the dme library.
#[derive(Error, Debug)]
pub enum DmeError {
    /// Order extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Note source error.
    #[error("note source error: {0}")]
    Source(#[from] SourceError),

    /// Order submission error.
    #[error("order submission error: {0}")]
    Sink(#[from] SinkError),

    /// Order serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to note-to-order extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The note was empty or contained only whitespace.
    #[error("physician note text cannot be empty")]
    EmptyNote,

    /// An add-on rule cannot be used for matching.
    #[error("invalid add-on rule: {0}")]
    InvalidRule(String),
}

/// Errors raised while reading a physician note.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The note file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The note document is not valid JSON.
    #[error("failed to parse JSON note {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The requested note format is not supported.
    #[error("unknown physician note format: {0}")]
    UnknownFormat(String),
}

/// Errors raised while submitting an order.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The intake API answered with a non-success status.
    #[error("intake API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The destination is not a usable address.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// Writing the payload to a local stream failed.
    #[error("failed to write order: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the dme library.
pub type Result<T> = std::result::Result<T, DmeError>;
