//! Oxygen flow rate and usage extraction.

use crate::models::order::OxygenUsage;

use super::patterns::{EXERTION_USAGE, OXYGEN_FLOW, SLEEP_USAGE};
use super::{ExtractionMatch, FieldExtractor};

/// Flow rate extractor. Values are normalized to `"<number> L"`.
pub struct FlowRateExtractor;

impl FlowRateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlowRateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FlowRateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        OXYGEN_FLOW
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(format_liters(&caps[1]), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Format a flow rate number the way orders carry it.
pub fn format_liters(number: &str) -> String {
    format!("{} L", number)
}

/// Extract the first oxygen flow rate in the note.
pub fn extract_liters(text: &str) -> Option<String> {
    FlowRateExtractor::new().extract(text).map(|m| m.value)
}

/// Detect when the patient uses oxygen.
pub fn detect_oxygen_usage(text: &str) -> OxygenUsage {
    OxygenUsage::from_flags(SLEEP_USAGE.is_match(text), EXERTION_USAGE.is_match(text))
}
