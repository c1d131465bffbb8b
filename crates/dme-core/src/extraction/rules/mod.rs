//! Rule-based field extractors for physician notes.

pub mod accessories;
pub mod device;
pub mod oxygen;
pub mod patterns;
pub mod provider;

pub use accessories::{detect_mask_type, detect_qualifier, AddOnExtractor};
pub use device::{classify_device, DeviceClassifier};
pub use oxygen::{detect_oxygen_usage, extract_liters, FlowRateExtractor};
pub use patterns::*;
pub use provider::extract_ordering_provider;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value extracted from a note, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
