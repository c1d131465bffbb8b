//! Rule-based order extractor.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::order::{Device, Order};

use super::rules::{
    accessories::{detect_mask_type, detect_qualifier, AddOnExtractor},
    device::classify_device,
    oxygen::{detect_oxygen_usage, extract_liters},
    patterns::UNKNOWN_PROVIDER,
    provider::extract_ordering_provider,
};
use super::{OrderExtractor, Result};

/// Result of order extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted order.
    pub order: Order,
    /// Fields that fell back to a default.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for note parsing with diagnostics.
pub trait NoteParser {
    /// Parse an order from note text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Keyword and pattern based extractor.
///
/// Holds no mutable state, so one instance can serve any number of notes
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RuleOrderExtractor {
    add_ons: AddOnExtractor,
}

impl RuleOrderExtractor {
    /// Create an extractor with the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            add_ons: AddOnExtractor::new(&config.add_ons)?,
        })
    }

    fn build_order(&self, text: &str, warnings: &mut Vec<String>) -> Order {
        // Classification gates every other field.
        let device = classify_device(text);
        if device == Device::Unknown {
            warnings.push("Could not classify device".to_string());
        }

        let mask_type = match device {
            Device::Cpap => detect_mask_type(text),
            _ => None,
        };

        let ordering_provider = match extract_ordering_provider(text) {
            Some(m) => m.value,
            None => {
                warnings.push("Could not find ordering provider".to_string());
                UNKNOWN_PROVIDER.to_string()
            }
        };

        let (liters, usage) = match device {
            Device::OxygenTank => {
                let liters = extract_liters(text);
                if liters.is_none() {
                    warnings.push("Could not extract oxygen flow rate".to_string());
                }
                (liters, Some(detect_oxygen_usage(text)))
            }
            _ => (None, None),
        };

        Order {
            device,
            mask_type,
            add_ons: self.add_ons.tags(text),
            qualifier: detect_qualifier(text),
            ordering_provider,
            liters,
            usage,
        }
    }
}

impl NoteParser for RuleOrderExtractor {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyNote);
        }

        info!("Parsing physician note from {} characters of text", text.len());

        let mut warnings = Vec::new();
        let order = self.build_order(text, &mut warnings);

        debug!(
            device = %order.device,
            add_ons = order.add_ons.len(),
            warnings = warnings.len(),
            "Extracted order details"
        );

        Ok(ExtractionResult {
            order,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl OrderExtractor for RuleOrderExtractor {
    fn extract(&self, note: &str) -> Result<Order> {
        self.parse(note).map(|r| r.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::AddOnRule;
    use crate::models::order::{MaskType, OxygenUsage};
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Order {
        RuleOrderExtractor::new().extract(text).unwrap()
    }

    #[test]
    fn test_cpap_note() {
        let order = extract(
            "Patient needs a CPAP with full face mask and humidifier. AHI > 20. Ordered by Dr. Cameron.",
        );

        assert_eq!(
            order,
            Order {
                device: Device::Cpap,
                mask_type: Some(MaskType::FullFace),
                add_ons: vec!["humidifier".to_string()],
                qualifier: "AHI > 20".to_string(),
                ordering_provider: "Dr. Cameron".to_string(),
                liters: None,
                usage: None,
            }
        );
    }

    #[test]
    fn test_oxygen_note() {
        let order = extract("Patient requires oxygen at 2L for use during sleep and exertion. Dr. House.");

        assert_eq!(
            order,
            Order {
                device: Device::OxygenTank,
                mask_type: None,
                add_ons: Vec::new(),
                qualifier: String::new(),
                ordering_provider: "Dr. House".to_string(),
                liters: Some("2 L".to_string()),
                usage: Some(OxygenUsage::SleepAndExertion),
            }
        );
    }

    #[test]
    fn test_wheelchair_note() {
        let order = extract("Patient needs a wheelchair.");

        assert_eq!(
            order,
            Order {
                device: Device::Wheelchair,
                mask_type: None,
                add_ons: Vec::new(),
                qualifier: String::new(),
                ordering_provider: "Unknown".to_string(),
                liters: None,
                usage: None,
            }
        );
    }

    #[test]
    fn test_empty_note_is_rejected() {
        let extractor = RuleOrderExtractor::new();

        assert_eq!(extractor.extract(""), Err(ExtractionError::EmptyNote));
        assert_eq!(extractor.extract("  \n\t "), Err(ExtractionError::EmptyNote));
    }

    #[test]
    fn test_cpap_wins_over_oxygen() {
        let order = extract("Oxygen at 2L during sleep; start CPAP with full face mask.");

        assert_eq!(order.device, Device::Cpap);
        assert_eq!(order.mask_type, Some(MaskType::FullFace));
        assert_eq!(order.liters, None);
        assert_eq!(order.usage, None);
    }

    #[test]
    fn test_mask_type_only_for_cpap() {
        let order = extract("Wheelchair; previously used a full face mask.");

        assert_eq!(order.device, Device::Wheelchair);
        assert_eq!(order.mask_type, None);
    }

    #[test]
    fn test_add_ons_and_qualifier_apply_to_any_device() {
        let order = extract("Oxygen with humidifier. AHI > 20.");

        assert_eq!(order.device, Device::OxygenTank);
        assert_eq!(order.add_ons, vec!["humidifier"]);
        assert_eq!(order.qualifier, "AHI > 20");
    }

    #[test]
    fn test_oxygen_without_rate_or_usage() {
        let order = extract("Home oxygen needed.");

        assert_eq!(order.liters, None);
        assert_eq!(order.usage, Some(OxygenUsage::Unspecified));
    }

    #[test]
    fn test_unknown_device() {
        let order = extract("Patient needs a walker. Dr. Wilson.");

        assert_eq!(order.device, Device::Unknown);
        assert_eq!(order.ordering_provider, "Dr. Wilson");
        assert_eq!(order.liters, None);
        assert_eq!(order.usage, None);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "CPAP, humidifier, full face. Ordered by Dr. Cameron.";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_parse_reports_defaults() {
        let result = RuleOrderExtractor::new().parse("Home oxygen needed.").unwrap();

        assert_eq!(
            result.warnings,
            vec![
                "Could not find ordering provider".to_string(),
                "Could not extract oxygen flow rate".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_config_add_ons() {
        let config = ExtractionConfig {
            add_ons: vec![
                AddOnRule::new("humidifier", "humidifier"),
                AddOnRule::new("chin strap", "chin strap"),
            ],
        };
        let extractor = RuleOrderExtractor::from_config(&config).unwrap();

        let order = extractor.extract("CPAP with chin strap and humidifier").unwrap();
        assert_eq!(order.add_ons, vec!["chin strap", "humidifier"]);
    }

    #[test]
    fn test_from_config_rejects_bad_rule() {
        let config = ExtractionConfig {
            add_ons: vec![AddOnRule::new("", "humidifier")],
        };

        assert!(matches!(
            RuleOrderExtractor::from_config(&config),
            Err(ExtractionError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleOrderExtractor>();
    }
}
