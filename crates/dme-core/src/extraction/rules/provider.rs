//! Ordering provider extraction.
//!
//! This is a scan-and-slice heuristic, not a name parser:
//! 1. find the first case-sensitive `Dr.` in the note,
//! 2. take everything from there to the end of the note,
//! 3. drop the `Ordered by ` lead-in,
//! 4. trim periods and whitespace from both ends.
//!
//! Anything written after the name stays in the result.

use super::patterns::{ORDERED_BY_PREFIX, PROVIDER_MARKER};
use super::ExtractionMatch;

/// Extract the ordering provider, or `None` if no provider marker exists.
pub fn extract_ordering_provider(text: &str) -> Option<ExtractionMatch<String>> {
    let start = text.find(PROVIDER_MARKER)?;
    let remainder = &text[start..];

    let provider = remainder
        .replace(ORDERED_BY_PREFIX, "")
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string();

    Some(ExtractionMatch::new(provider, remainder).with_position(start, text.len()))
}
