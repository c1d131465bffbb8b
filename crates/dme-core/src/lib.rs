//! Core library for durable medical equipment (DME) order extraction.
//!
//! This crate provides:
//! - Order model with its canonical JSON wire shape
//! - Rule-based extraction of orders from free-text physician notes
//! - Note sources (plain text, JSON documents, inline strings)
//! - Order sinks (HTTP intake API, stdout)
//! - A single-note pipeline tying them together

pub mod error;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use error::{DmeError, ExtractionError, Result, SinkError, SourceError};
pub use extraction::{ExtractionResult, NoteParser, OrderExtractor, RuleOrderExtractor};
pub use models::config::DmeConfig;
pub use models::order::{Device, MaskType, Order, OxygenUsage};
pub use pipeline::{OrderPipeline, RunOutcome, SkipReason};
pub use sink::{OrderSink, StdoutOrderSink};
#[cfg(feature = "http")]
pub use sink::HttpOrderSink;
pub use source::{InlineNoteSource, JsonNoteSource, NoteFormat, NoteSource, TextFileNoteSource};
