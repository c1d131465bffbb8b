//! Configuration structures for the order pipeline.

use serde::{Deserialize, Serialize};

use crate::source::NoteFormat;

/// Default intake endpoint for submitted orders.
pub const DEFAULT_API_URL: &str = "https://api.example.com/submit-order";

/// Main configuration for the dme pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DmeConfig {
    /// Intake API configuration.
    pub api: ApiConfig,

    /// Note source configuration.
    pub source: SourceConfig,

    /// Order extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Intake API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint that receives order JSON.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with each submission.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("dme/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Note source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// How note files are read.
    pub format: NoteFormat,

    /// Top-level field holding the note in JSON documents.
    pub data_field: String,

    /// Note used when a plain text note file does not exist.
    pub fallback_note: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            format: NoteFormat::Auto,
            data_field: "data".to_string(),
            fallback_note: None,
        }
    }
}

/// Order extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Accessory keywords recognized in notes.
    pub add_ons: Vec<AddOnRule>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            add_ons: vec![AddOnRule::new("humidifier", "humidifier")],
        }
    }
}

/// Maps a keyword found in a note to an add-on tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnRule {
    /// Case-insensitive keyword searched in the note.
    pub keyword: String,

    /// Tag emitted in `addOns` when the keyword is present.
    pub tag: String,
}

impl AddOnRule {
    pub fn new(keyword: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            tag: tag.into(),
        }
    }
}

impl DmeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DmeConfig =
            serde_json::from_str(r#"{"api": {"url": "http://localhost:8080/orders"}}"#).unwrap();

        assert_eq!(config.api.url, "http://localhost:8080/orders");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.source.data_field, "data");
        assert_eq!(config.source.format, NoteFormat::Auto);
        assert_eq!(
            config.extraction.add_ons,
            vec![AddOnRule::new("humidifier", "humidifier")]
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DmeConfig::default();
        config.source.format = NoteFormat::Json;
        config.extraction.add_ons.push(AddOnRule::new("chin strap", "chin strap"));
        config.save(&path).unwrap();

        let loaded = DmeConfig::from_file(&path).unwrap();
        assert_eq!(loaded.source.format, NoteFormat::Json);
        assert_eq!(loaded.extraction.add_ons.len(), 2);
        assert_eq!(loaded.api.url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_config_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DmeConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
