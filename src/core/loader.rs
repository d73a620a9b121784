#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// What a file decodes to before any extractor sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Parsed JSON or YAML.
    Document(Value),
    /// Source text, left for a framework extractor to interpret.
    Source(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Json,
    Yaml,
    Source,
}

impl InputKind {
    /// Match on the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(InputKind::Json),
            "yaml" | "yml" => Ok(InputKind::Yaml),
            "py" => Ok(InputKind::Source),
            _ => {
                let suffix = if extension.is_empty() {
                    String::new()
                } else {
                    format!(".{}", extension)
                };
                Err(AppError::new(
                    ErrorCategory::UnsupportedInputType,
                    format!("Unsupported file type: {}", suffix),
                )
                .with_context("path", path.display().to_string()))
            }
        }
    }
}

pub struct FileLoader;

impl FileLoader {
    pub fn is_supported(path: &Path) -> bool {
        InputKind::from_path(path).is_ok()
    }

    pub fn load(path: &Path) -> Result<RawInput, AppError> {
        match InputKind::from_path(path)? {
            InputKind::Json => Self::load_json(path).map(RawInput::Document),
            InputKind::Yaml => Self::load_yaml(path).map(RawInput::Document),
            InputKind::Source => Self::read_text(path).map(RawInput::Source),
        }
    }

    /// Load a JSON or YAML document; source-text files are rejected.
    pub fn load_document(path: &Path) -> Result<Value, AppError> {
        match Self::load(path)? {
            RawInput::Document(value) => Ok(value),
            RawInput::Source(_) => Err(AppError::new(
                ErrorCategory::UnsupportedInputType,
                format!("{} is source text, not a document", path.display()),
            )),
        }
    }

    fn load_json(path: &Path) -> Result<Value, AppError> {
        let text = Self::read_text(path)?;
        serde_json::from_str(&text).map_err(|err| {
            AppError::new(
                ErrorCategory::SerializationError,
                format!("failed to parse {}: {}", path.display(), err),
            )
        })
    }

    fn load_yaml(path: &Path) -> Result<Value, AppError> {
        let text = Self::read_text(path)?;
        serde_yaml::from_str(&text).map_err(|err| {
            AppError::new(
                ErrorCategory::SerializationError,
                format!("failed to parse {}: {}", path.display(), err),
            )
        })
    }

    fn read_text(path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to read {}: {}", path.display(), err),
            )
        })
    }
}
