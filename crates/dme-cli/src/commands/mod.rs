//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use dme_core::models::config::DmeConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dme")
        .join("config.json")
}

/// Resolve the configuration file path from the `--config` flag.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration from an explicit path, the default path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DmeConfig> {
    if let Some(path) = config_path {
        return Ok(DmeConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(DmeConfig::from_file(&path)?)
    } else {
        Ok(DmeConfig::default())
    }
}
