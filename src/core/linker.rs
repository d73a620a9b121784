//! Reference resolution strategies extractors can opt into.

use crate::core::pattern::Pattern;
use serde_json::Value;

/// Resolve each task's `assigned_agent` against agent roles and names.
///
/// A task whose reference equals an agent's `role` (checked first) or `name`
/// is rewritten to that agent's id, and the task id is appended to the
/// agent's `tasks` unless already listed. References that already hold an
/// agent id are kept and recorded the same way. Unmatched references are left
/// as they were. Identities are never touched.
pub fn link_by_role(mut pattern: Pattern) -> Pattern {
    for task in &mut pattern.tasks {
        let reference = task.assigned_agent.trim();
        if reference.is_empty() {
            continue;
        }

        let position = pattern
            .agents
            .iter()
            .position(|agent| agent.id == reference)
            .or_else(|| {
                pattern
                    .agents
                    .iter()
                    .position(|agent| !agent.role.is_empty() && agent.role == reference)
            })
            .or_else(|| {
                pattern
                    .agents
                    .iter()
                    .position(|agent| agent.name == reference)
            });

        let Some(position) = position else {
            tracing::debug!(task = %task.id, reference, "no agent matches task reference");
            continue;
        };

        let agent = &mut pattern.agents[position];
        task.assigned_agent = agent.id.clone();
        if !agent
            .tasks
            .iter()
            .any(|existing| existing.as_str() == Some(task.id.as_str()))
        {
            agent.tasks.push(Value::String(task.id.clone()));
        }
    }
    pattern
}
