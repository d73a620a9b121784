#![allow(clippy::result_large_err)]

use super::AppConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::utils::serialization::OutputFormat;
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "patterns.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/patterns.toml)
    /// Environment variables override config file values
    pub fn load_from_workspace(workspace_path: &Path) -> Result<AppConfig, AppError> {
        Self::load(&workspace_path.join(CONFIG_FILE_NAME), false)
    }

    /// Load config from an explicit path, which then has to exist.
    pub fn load_from_path(path: &Path) -> Result<AppConfig, AppError> {
        Self::load(path, true)
    }

    fn load(path: &Path, required: bool) -> Result<AppConfig, AppError> {
        let config_file = Self::load_from_file(path)?;
        if required && config_file.is_none() {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                format!("Config file {} does not exist", path.display()),
            ));
        }

        let mut config = config_file.unwrap_or_default();
        Self::apply_env_overrides(&mut config);
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<AppConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigurationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut AppConfig) {
        if let Ok(framework) = env::var("PATTERNS_FRAMEWORK") {
            config.extractor.framework = framework;
        }

        if let Ok(link_str) = env::var("PATTERNS_LINK_BY_ROLE") {
            if let Ok(link_by_role) = link_str.parse::<bool>() {
                config.extractor.link_by_role = link_by_role;
            }
        }

        if let Ok(directory) = env::var("PATTERNS_OUTPUT_DIR") {
            config.output.directory = if directory.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(directory))
            };
        }

        if let Ok(format_str) = env::var("PATTERNS_OUTPUT_FORMAT") {
            match format_str.parse::<OutputFormat>() {
                Ok(format) => config.output.format = format,
                Err(err) => tracing::warn!("ignoring PATTERNS_OUTPUT_FORMAT: {}", err),
            }
        }

        if let Ok(pretty_str) = env::var("PATTERNS_OUTPUT_PRETTY") {
            if let Ok(pretty) = pretty_str.parse::<bool>() {
                config.output.pretty = pretty;
            }
        }

        if let Ok(recursive_str) = env::var("PATTERNS_RECURSIVE") {
            if let Ok(recursive) = recursive_str.parse::<bool>() {
                config.discovery.recursive = recursive;
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "PATTERNS_FRAMEWORK - Override the framework name (default: generic)",
            "PATTERNS_LINK_BY_ROLE - Resolve task assignments by agent role/name (true/false)",
            "PATTERNS_OUTPUT_DIR - Directory for normalized patterns (empty: stdout)",
            "PATTERNS_OUTPUT_FORMAT - Output format (json/yaml, default: json)",
            "PATTERNS_OUTPUT_PRETTY - Pretty-print JSON output (true/false, default: true)",
            "PATTERNS_RECURSIVE - Walk directory arguments recursively (true/false, default: true)",
        ]
    }

    /// Validate configuration values
    pub fn validate_config(config: &AppConfig) -> Result<(), AppError> {
        let framework = &config.extractor.framework;
        if framework.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                "Framework name cannot be empty",
            ));
        }

        // The framework name becomes part of output file names.
        if framework
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(AppError::new(
                ErrorCategory::ConfigurationError,
                format!(
                    "Framework name '{}' must not contain whitespace or path separators",
                    framework
                ),
            ));
        }

        if let Some(directory) = &config.output.directory {
            if directory.as_os_str().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ConfigurationError,
                    "Output directory cannot be empty",
                ));
            }
        }

        Ok(())
    }
}
