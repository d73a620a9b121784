use crate::utils::serialization::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Configuration loaded from patterns.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Extractor configuration
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Input discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Framework name stamped on every pattern
    #[serde(default = "default_framework")]
    pub framework: String,

    /// Resolve task assignments against agent roles and names
    #[serde(default)]
    pub link_by_role: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one file per pattern; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Input discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Descend into subdirectories of directory arguments
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

fn default_framework() -> String {
    "generic".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_recursive() -> bool {
    true
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            framework: default_framework(),
            link_by_role: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: None,
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            recursive: default_recursive(),
        }
    }
}
