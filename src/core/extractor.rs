#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::linker;
use crate::core::loader::{FileLoader, RawInput};
use crate::core::pattern::Pattern;
use crate::core::raw::RawPattern;
use crate::core::types::ErrorCategory;
use std::path::Path;

/// Framework-specific capabilities plugged into the pipeline.
pub trait Extractor: Send + Sync {
    /// Name stamped on every pattern this extractor produces.
    fn framework_name(&self) -> &str;

    /// Turn one file into the raw dictionary.
    fn extract(&self, path: &Path) -> Result<RawPattern, AppError>;

    /// Resolve cross-entity references after assembly. Must not change any
    /// entity identity.
    fn link(&self, pattern: Pattern) -> Pattern {
        pattern
    }
}

/// Extractor for JSON/YAML files already shaped like the raw dictionary.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    framework: String,
    link_by_role: bool,
}

impl DocumentExtractor {
    pub fn new<T: Into<String>>(framework: T) -> Self {
        DocumentExtractor {
            framework: framework.into(),
            link_by_role: false,
        }
    }

    pub fn with_role_linking(mut self, enabled: bool) -> Self {
        self.link_by_role = enabled;
        self
    }
}

impl Extractor for DocumentExtractor {
    fn framework_name(&self) -> &str {
        &self.framework
    }

    fn extract(&self, path: &Path) -> Result<RawPattern, AppError> {
        match FileLoader::load(path)? {
            RawInput::Document(value) => RawPattern::from_value(value)
                .map_err(|err| err.with_context("path", path.display().to_string())),
            RawInput::Source(_) => Err(AppError::new(
                ErrorCategory::ExtractionError,
                format!(
                    "{} is source text; the {} extractor only reads JSON or YAML documents",
                    path.display(),
                    self.framework
                ),
            )),
        }
    }

    fn link(&self, pattern: Pattern) -> Pattern {
        if self.link_by_role {
            linker::link_by_role(pattern)
        } else {
            pattern
        }
    }
}
