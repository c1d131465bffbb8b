//! Data models for orders and pipeline configuration.

pub mod config;
pub mod order;

pub use config::{AddOnRule, ApiConfig, DmeConfig, ExtractionConfig, SourceConfig};
pub use order::{Device, MaskType, Order, OxygenUsage};
