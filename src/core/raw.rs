#![allow(clippy::result_large_err)]

//! Loosely typed input handed over by extractors.
//!
//! Lookups never fail on absent keys; a key holding `null` counts as absent.
//! Only values of the wrong shape (a list where text is expected, a scalar
//! where a list of records is expected) are reported, as [`RawShapeError`].

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RawShapeError {
    #[error("field '{field}' must be {expected}, found {found}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl RawShapeError {
    pub fn field(&self) -> &str {
        match self {
            RawShapeError::UnexpectedType { field, .. } => field,
        }
    }
}

impl From<RawShapeError> for AppError {
    fn from(err: RawShapeError) -> Self {
        let field = err.field().to_string();
        AppError::new(ErrorCategory::NormalizationError, err.to_string()).with_context("field", field)
    }
}

/// Name of a JSON value kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// The raw top-level dictionary produced by an extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPattern(Map<String, Value>);

impl RawPattern {
    pub fn new(fields: Map<String, Value>) -> Self {
        RawPattern(fields)
    }

    /// Wrap a parsed document. Only mappings are accepted.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(fields) => Ok(RawPattern(fields)),
            Value::Null => Err(AppError::new(
                ErrorCategory::ExtractionError,
                "document is empty",
            )),
            other => Err(AppError::new(
                ErrorCategory::ExtractionError,
                format!("document must be a mapping, found {}", kind_of(&other)),
            )),
        }
    }

    pub fn record(&self) -> RawRecord<'_> {
        RawRecord::new(&self.0, String::new())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawPattern {
    fn from(fields: Map<String, Value>) -> Self {
        RawPattern(fields)
    }
}

/// Read-only view over one raw mapping, labelled with its path for errors.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
    path: String,
}

impl<'a> RawRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>, path: String) -> Self {
        RawRecord {
            fields: Some(fields),
            path,
        }
    }

    /// A record with no keys at all.
    pub fn empty(path: String) -> Self {
        RawRecord { fields: None, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn shape_error(&self, key: &str, expected: &'static str, found: &Value) -> RawShapeError {
        RawShapeError::UnexpectedType {
            field: self.field_path(key),
            expected,
            found: kind_of(found),
        }
    }

    /// Raw value for `key`, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(key))
            .filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Text for `key`; numbers and booleans are rendered as text.
    pub fn text(&self, key: &str) -> Result<Option<String>, RawShapeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => scalar_text(value)
                .map(Some)
                .ok_or_else(|| self.shape_error(key, "text", value)),
        }
    }

    pub fn text_or(&self, key: &str, default: &str) -> Result<String, RawShapeError> {
        Ok(self.text(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// First present key wins; `None` only when every candidate is absent.
    pub fn first_text(&self, keys: &[&str]) -> Result<Option<String>, RawShapeError> {
        for key in keys {
            if let Some(text) = self.text(key)? {
                return Ok(Some(text));
            }
        }
        Ok(None)
    }

    pub fn flag_or(&self, key: &str, default: bool) -> Result<bool, RawShapeError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(value) => Err(self.shape_error(key, "a boolean", value)),
        }
    }

    /// Reference list copied as given. Elements keep their raw shape, so a
    /// tool listed as `{name: search}` stays a mapping; a lone value counts as
    /// a one-element list.
    pub fn references(&self, key: &str) -> Vec<Value> {
        match self.get(key) {
            None => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(value) => vec![value.clone()],
        }
    }

    /// Nested mapping for `key`; absent yields an empty record.
    pub fn record(&self, key: &str) -> Result<RawRecord<'a>, RawShapeError> {
        let path = self.field_path(key);
        match self.get(key) {
            None => Ok(RawRecord::empty(path)),
            Some(Value::Object(fields)) => Ok(RawRecord::new(fields, path)),
            Some(value) => Err(self.shape_error(key, "a mapping", value)),
        }
    }

    /// List of nested mappings for `key`, in input order; absent yields none.
    pub fn records(&self, key: &str) -> Result<Vec<RawRecord<'a>>, RawShapeError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let path = format!("{}[{}]", self.field_path(key), index);
                    match item {
                        Value::Object(fields) => Ok(RawRecord::new(fields, path)),
                        other => Err(RawShapeError::UnexpectedType {
                            field: path,
                            expected: "a mapping",
                            found: kind_of(other),
                        }),
                    }
                })
                .collect(),
            Some(value) => Err(self.shape_error(key, "a list", value)),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
