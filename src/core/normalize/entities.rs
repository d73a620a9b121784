#![allow(clippy::result_large_err)]

use crate::core::identity::{IdSource, AGENT_PREFIX, RESOURCE_PREFIX, TASK_PREFIX, TOOL_PREFIX};
use crate::core::pattern::{Agent, Resource, Task, Tool};
use crate::core::raw::{RawRecord, RawShapeError};

pub const DEFAULT_AGENT_NAME: &str = "Agent";
pub const DEFAULT_TASK_TITLE: &str = "Task";
pub const DEFAULT_TOOL_NAME: &str = "Tool";
pub const DEFAULT_RESOURCE_NAME: &str = "Resource";

/// Characters of a task description used when the task has no title.
pub const TASK_TITLE_CHARS: usize = 50;

/// Raw keys that may carry an agent's language model, by priority.
pub const LANGUAGE_MODEL_KEYS: [&str; 3] = ["llm", "model", "language_model"];

/// Raw keys that may carry a task's assigned agent, by priority.
pub const ASSIGNED_AGENT_KEYS: [&str; 2] = ["agent", "assigned_agent"];

pub fn normalize_agents(
    records: &[RawRecord<'_>],
    ids: &dyn IdSource,
) -> Result<Vec<Agent>, RawShapeError> {
    records.iter().map(|record| normalize_agent(record, ids)).collect()
}

pub fn normalize_agent(record: &RawRecord<'_>, ids: &dyn IdSource) -> Result<Agent, RawShapeError> {
    let id = ids.make_id(AGENT_PREFIX);
    let name = match record.first_text(&["name", "role"])? {
        Some(name) => name,
        None => DEFAULT_AGENT_NAME.to_string(),
    };

    Ok(Agent {
        id,
        name,
        role: record.text_or("role", "")?,
        description: record.text_or("description", "")?,
        goal: record.text_or("goal", "")?,
        backstory: record.text_or("backstory", "")?,
        tasks: record.references("tasks"),
        tools: record.references("tools"),
        language_model: record.first_text(&LANGUAGE_MODEL_KEYS)?,
        memory: record.flag_or("memory", false)?,
        human_input_mode: record.text("humanInputMode")?,
    })
}

pub fn normalize_tasks(
    records: &[RawRecord<'_>],
    ids: &dyn IdSource,
) -> Result<Vec<Task>, RawShapeError> {
    records.iter().map(|record| normalize_task(record, ids)).collect()
}

pub fn normalize_task(record: &RawRecord<'_>, ids: &dyn IdSource) -> Result<Task, RawShapeError> {
    let id = ids.make_id(TASK_PREFIX);
    let description = record.text("description")?;
    let title = match record.text("title")? {
        Some(title) => title,
        None => description
            .as_deref()
            .map(|text| text.chars().take(TASK_TITLE_CHARS).collect())
            .unwrap_or_else(|| DEFAULT_TASK_TITLE.to_string()),
    };

    Ok(Task {
        id,
        title,
        description: description.unwrap_or_default(),
        expected_output: record.text_or("expected_output", "")?,
        assigned_agent: record.first_text(&ASSIGNED_AGENT_KEYS)?.unwrap_or_default(),
    })
}

pub fn normalize_tools(
    records: &[RawRecord<'_>],
    ids: &dyn IdSource,
) -> Result<Vec<Tool>, RawShapeError> {
    records
        .iter()
        .map(|record| {
            Ok(Tool {
                id: ids.make_id(TOOL_PREFIX),
                name: record.text_or("name", DEFAULT_TOOL_NAME)?,
                description: record.text_or("description", "")?,
                kind: record.text_or("type", "")?,
                resource: record.text_or("resource", "")?,
            })
        })
        .collect()
}

pub fn normalize_resources(
    records: &[RawRecord<'_>],
    ids: &dyn IdSource,
) -> Result<Vec<Resource>, RawShapeError> {
    records
        .iter()
        .map(|record| {
            Ok(Resource {
                id: ids.make_id(RESOURCE_PREFIX),
                name: record.text_or("name", DEFAULT_RESOURCE_NAME)?,
                kind: record.text_or("type", "")?,
                description: record.text_or("description", "")?,
            })
        })
        .collect()
}
