//! DME order model and its canonical wire shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A durable medical equipment order extracted from a physician note.
///
/// Every field is always serialized. Absent values go out as explicit
/// `null`, never as missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Classified device.
    pub device: Device,

    /// Mask descriptor (CPAP orders only).
    pub mask_type: Option<MaskType>,

    /// Accessory tags in the order they appear in the note.
    pub add_ons: Vec<String>,

    /// Clinical qualifier, empty when none was found.
    pub qualifier: String,

    /// Prescribing provider as written in the note, or `"Unknown"`.
    pub ordering_provider: String,

    /// Oxygen flow rate such as `"2 L"` (oxygen orders only).
    pub liters: Option<String>,

    /// Oxygen usage context (oxygen orders only).
    pub usage: Option<OxygenUsage>,
}

impl Order {
    /// Serialize to the compact canonical JSON payload.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse an order from its canonical JSON payload.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Closed device vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    #[serde(rename = "CPAP")]
    Cpap,
    #[serde(rename = "Oxygen Tank")]
    OxygenTank,
    #[serde(rename = "Wheelchair")]
    Wheelchair,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Device {
    /// Wire name of the device.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpap => "CPAP",
            Self::OxygenTank => "Oxygen Tank",
            Self::Wheelchair => "Wheelchair",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPAP mask descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskType {
    #[serde(rename = "full face")]
    FullFace,
}

impl MaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullFace => "full face",
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When supplemental oxygen is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OxygenUsage {
    #[serde(rename = "sleep")]
    Sleep,
    #[serde(rename = "exertion")]
    Exertion,
    #[serde(rename = "sleep and exertion")]
    SleepAndExertion,
    /// Oxygen order without a usage context. Serialized as `""`.
    #[serde(rename = "")]
    Unspecified,
}

impl OxygenUsage {
    /// Combine the two usage signals found in a note.
    pub fn from_flags(sleep: bool, exertion: bool) -> Self {
        match (sleep, exertion) {
            (true, true) => Self::SleepAndExertion,
            (true, false) => Self::Sleep,
            (false, true) => Self::Exertion,
            (false, false) => Self::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Exertion => "exertion",
            Self::SleepAndExertion => "sleep and exertion",
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for OxygenUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
