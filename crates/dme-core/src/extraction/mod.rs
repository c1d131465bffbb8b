//! Physician note to DME order extraction.

mod engine;
pub mod rules;

pub use engine::{ExtractionResult, NoteParser, RuleOrderExtractor};

use crate::error::ExtractionError;
use crate::models::order::Order;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for note-to-order extractors.
pub trait OrderExtractor {
    /// Extract an order from physician note text.
    ///
    /// Fails only when the note is empty or whitespace.
    fn extract(&self, note: &str) -> Result<Order>;
}
