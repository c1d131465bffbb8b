//! Device classification.
//!
//! Rules are checked in a fixed priority order and the first rule whose
//! keyword appears anywhere in the note wins. A note that mentions both a
//! CPAP and oxygen is a CPAP order, no matter which keyword comes first.

use regex::Regex;

use crate::models::order::Device;

use super::patterns::{CPAP_KEYWORD, OXYGEN_KEYWORD, WHEELCHAIR_KEYWORD};
use super::{ExtractionMatch, FieldExtractor};

/// Classification rules in priority order.
fn device_rules() -> [(&'static Regex, Device); 3] {
    [
        (&*CPAP_KEYWORD, Device::Cpap),
        (&*OXYGEN_KEYWORD, Device::OxygenTank),
        (&*WHEELCHAIR_KEYWORD, Device::Wheelchair),
    ]
}

/// Device classifier.
pub struct DeviceClassifier;

impl DeviceClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DeviceClassifier {
    type Output = ExtractionMatch<Device>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Every device mentioned in the note, highest priority first.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        device_rules()
            .into_iter()
            .filter_map(|(pattern, device)| {
                pattern.find(text).map(|m| {
                    ExtractionMatch::new(device, m.as_str()).with_position(m.start(), m.end())
                })
            })
            .collect()
    }
}

/// Classify the device a note is asking for.
pub fn classify_device(text: &str) -> Device {
    DeviceClassifier::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(Device::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_single_device() {
        assert_eq!(classify_device("Patient needs a CPAP."), Device::Cpap);
        assert_eq!(classify_device("Requires oxygen at night."), Device::OxygenTank);
        assert_eq!(classify_device("Patient needs a wheelchair."), Device::Wheelchair);
        assert_eq!(classify_device("Patient needs a walker."), Device::Unknown);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify_device("start cpap therapy"), Device::Cpap);
        assert_eq!(classify_device("OXYGEN 2L"), Device::OxygenTank);
        assert_eq!(classify_device("Power WheelChair"), Device::Wheelchair);
    }

    #[test]
    fn test_priority_beats_position() {
        assert_eq!(
            classify_device("Continue oxygen overnight and add CPAP."),
            Device::Cpap
        );
        assert_eq!(
            classify_device("Wheelchair for transport, oxygen as needed."),
            Device::OxygenTank
        );
    }

    #[test]
    fn test_extract_all_in_priority_order() {
        let matches = DeviceClassifier::new()
            .extract_all("wheelchair, then oxygen, then a cpap");

        let devices: Vec<Device> = matches.iter().map(|m| m.value).collect();
        assert_eq!(devices, vec![Device::Cpap, Device::OxygenTank, Device::Wheelchair]);
        assert_eq!(matches[0].source, "cpap");
        assert_eq!(matches[2].position, Some((0, 10)));
    }
}
