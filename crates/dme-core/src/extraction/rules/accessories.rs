//! CPAP mask, add-on and qualifier detection.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::ExtractionError;
use crate::models::config::AddOnRule;
use crate::models::order::MaskType;

use super::patterns::{AHI_QUALIFIER, FULL_FACE_MASK, HUMIDIFIER_KEYWORD};
use super::{ExtractionMatch, FieldExtractor};

/// Detect the mask descriptor. Only meaningful for CPAP orders.
pub fn detect_mask_type(text: &str) -> Option<MaskType> {
    FULL_FACE_MASK.is_match(text).then_some(MaskType::FullFace)
}

/// Detect the clinical qualifier. The match is exact and case-sensitive.
pub fn detect_qualifier(text: &str) -> String {
    if text.contains(AHI_QUALIFIER) {
        AHI_QUALIFIER.to_string()
    } else {
        String::new()
    }
}

/// Add-on extractor driven by a keyword table.
///
/// Each rule is checked independently. Tags come out in the order their
/// keyword first appears in the note, and a tag is emitted at most once.
#[derive(Debug, Clone)]
pub struct AddOnExtractor {
    rules: Vec<(Regex, String)>,
}

impl AddOnExtractor {
    /// Build an extractor from keyword rules.
    pub fn new(rules: &[AddOnRule]) -> Result<Self, ExtractionError> {
        let rules = rules
            .iter()
            .map(|rule| {
                let keyword = rule.keyword.trim();
                if keyword.is_empty() {
                    return Err(ExtractionError::InvalidRule(format!(
                        "empty keyword for tag '{}'",
                        rule.tag
                    )));
                }
                if rule.tag.trim().is_empty() {
                    return Err(ExtractionError::InvalidRule(format!(
                        "empty tag for keyword '{}'",
                        keyword
                    )));
                }

                let pattern = RegexBuilder::new(&regex::escape(keyword))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ExtractionError::InvalidRule(e.to_string()))?;

                Ok((pattern, rule.tag.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Tags found in the note.
    pub fn tags(&self, text: &str) -> Vec<String> {
        self.extract_all(text).into_iter().map(|m| m.value).collect()
    }
}

impl Default for AddOnExtractor {
    fn default() -> Self {
        Self {
            rules: vec![(HUMIDIFIER_KEYWORD.clone(), "humidifier".to_string())],
        }
    }
}

impl FieldExtractor for AddOnExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut found: Vec<Self::Output> = self
            .rules
            .iter()
            .filter_map(|(pattern, tag)| {
                pattern.find(text).map(|m| {
                    ExtractionMatch::new(tag.clone(), m.as_str()).with_position(m.start(), m.end())
                })
            })
            .collect();

        // Stable sort keeps table order for keywords starting at the same byte.
        found.sort_by_key(|m| m.position.map(|(start, _)| start));

        let mut seen = HashSet::new();
        found.retain(|m| seen.insert(m.value.clone()));
        found
    }
}
