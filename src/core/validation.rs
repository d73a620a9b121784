#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::pattern::Pattern;
use crate::core::types::ErrorCategory;
use serde_json::Value;

/// Top-level keys every pattern must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "framework", "agents", "tasks", "workflow_pattern"];

pub struct PatternValidator;

impl PatternValidator {
    /// Structural gate for assembled patterns. Never mutates the pattern.
    pub fn validate(pattern: &Pattern) -> Result<bool, AppError> {
        let document = pattern.to_value()?;
        Self::validate_document(&document)
    }

    /// Same checks over a serialized pattern: required keys first (the first
    /// missing key fails), then a non-empty `agents` list.
    pub fn validate_document(document: &Value) -> Result<bool, AppError> {
        let fields = document.as_object().ok_or_else(|| {
            AppError::new(
                ErrorCategory::ValidationError,
                "Pattern document must be a mapping",
            )
        })?;

        for field in REQUIRED_FIELDS {
            if !fields.contains_key(field) {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("Missing required field: {}", field),
                )
                .with_context("field", field));
            }
        }

        let has_agents = match fields.get("agents") {
            Some(Value::Array(agents)) => !agents.is_empty(),
            _ => false,
        };
        if !has_agents {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Pattern must have at least one agent",
            )
            .with_context("field", "agents"));
        }

        Ok(true)
    }
}
