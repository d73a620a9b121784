#![allow(clippy::result_large_err)]

//! Assembly of canonical patterns from raw extractor output.

pub mod entities;
pub mod workflow;

use crate::core::clock::{format_timestamp, Clock};
use crate::core::error::AppError;
use crate::core::identity::{IdSource, PATTERN_PREFIX};
use crate::core::pattern::{Pattern, Provenance, EXTRACTOR_VERSION};
use crate::core::raw::RawPattern;
use std::path::Path;

pub use entities::{normalize_agents, normalize_resources, normalize_tasks, normalize_tools};
pub use workflow::{normalize_team, normalize_workflow};

/// `{framework}_{file stem}`, e.g. `crewai_research_team`.
pub fn readable_name(framework: &str, source_file: &Path) -> String {
    let stem = source_file
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("{}_{}", framework, stem)
}

/// Builds one [`Pattern`] per raw dictionary. Holds no state between calls.
pub struct PatternNormalizer<'a> {
    framework: &'a str,
    ids: &'a dyn IdSource,
    clock: &'a dyn Clock,
}

impl<'a> PatternNormalizer<'a> {
    pub fn new(framework: &'a str, ids: &'a dyn IdSource, clock: &'a dyn Clock) -> Self {
        PatternNormalizer {
            framework,
            ids,
            clock,
        }
    }

    /// Fill every canonical field, minting fresh identities throughout.
    ///
    /// Absent keys take their defaults. The only failures are raw values of
    /// the wrong shape, reported as `NormalizationError`.
    pub fn assemble(&self, raw: &RawPattern, source_file: &Path) -> Result<Pattern, AppError> {
        let pattern_id = self.ids.make_id(PATTERN_PREFIX);
        let record = raw.record();
        let source = source_file.display().to_string();
        let timestamp = format_timestamp(self.clock.now());

        let title = match record.text("title")? {
            Some(title) => title,
            None => format!("{} pattern {}", self.framework, pattern_id),
        };
        let description = record.text_or("description", "")?;
        let objective = record.text_or("objective", "")?;

        let agents = normalize_agents(&record.records("agents")?, self.ids)?;
        let tasks = normalize_tasks(&record.records("tasks")?, self.ids)?;
        let tools = normalize_tools(&record.records("tools")?, self.ids)?;
        let resources = normalize_resources(&record.records("resources")?, self.ids)?;
        let workflow_pattern = normalize_workflow(&record.record("workflow")?)?;
        let team = normalize_team(&record.record("team")?)?;

        tracing::debug!(
            pattern = %pattern_id,
            agents = agents.len(),
            tasks = tasks.len(),
            tools = tools.len(),
            resources = resources.len(),
            "assembled pattern"
        );

        Ok(Pattern {
            readable_name: readable_name(self.framework, source_file),
            framework: self.framework.to_string(),
            source_file: source.clone(),
            title,
            description,
            objective,
            created_at: timestamp.clone(),
            agents,
            tasks,
            tools,
            resources,
            workflow_pattern,
            team,
            provenance: Provenance {
                extracted_from: source,
                extraction_date: timestamp,
                extractor_version: EXTRACTOR_VERSION.to_string(),
            },
            id: pattern_id,
        })
    }
}
