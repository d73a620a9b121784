use crate::core::pattern::{Team, WorkflowPattern, WorkflowStep};
use crate::core::raw::{RawRecord, RawShapeError};

pub const DEFAULT_WORKFLOW_TYPE: &str = "Sequential";
pub const DEFAULT_TEAM_PROCESS: &str = "sequential";

/// Steps are copied as the extractor produced them: no shape checks, no
/// re-ordering, no recomputed `next_step` chain.
pub fn normalize_workflow(record: &RawRecord<'_>) -> Result<WorkflowPattern, RawShapeError> {
    let kind = record.text_or("type", DEFAULT_WORKFLOW_TYPE)?;
    let steps = record
        .references("steps")
        .into_iter()
        .map(WorkflowStep::new)
        .collect();

    Ok(WorkflowPattern { kind, steps })
}

pub fn normalize_team(record: &RawRecord<'_>) -> Result<Team, RawShapeError> {
    Ok(Team {
        name: record.text_or("name", "")?,
        process: record.text_or("process", DEFAULT_TEAM_PROCESS)?,
    })
}
