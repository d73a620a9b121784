use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version stamped into every provenance record.
pub const EXTRACTOR_VERSION: &str = "1.0.0";

/// One canonical, framework-agnostic agentic workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub readable_name: String,
    pub framework: String,
    pub source_file: String,
    pub title: String,
    pub description: String,
    pub objective: String,
    pub created_at: String,
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
    pub tools: Vec<Tool>,
    pub resources: Vec<Resource>,
    pub workflow_pattern: WorkflowPattern,
    pub team: Team,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub goal: String,
    pub backstory: String,
    /// Task references as supplied; resolved only by a linker.
    pub tasks: Vec<Value>,
    /// Tool references as supplied: names or whole tool mappings.
    pub tools: Vec<Value>,
    pub language_model: Option<String>,
    pub memory: bool,
    #[serde(rename = "humanInputMode")]
    pub human_input_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub expected_output: String,
    /// Weak reference to an agent; not guaranteed to match an agent id.
    pub assigned_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowPattern {
    #[serde(rename = "type")]
    pub kind: String,
    pub steps: Vec<WorkflowStep>,
}

/// A workflow step exactly as the extractor emitted it. Nothing about its
/// shape is checked; the accessors only read well-formed keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowStep(Value);

impl WorkflowStep {
    pub fn new(value: Value) -> Self {
        WorkflowStep(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|fields| fields.get(key))
    }

    /// Step id when it is text.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn task_id(&self) -> Option<&str> {
        self.get("task_id").and_then(Value::as_str)
    }

    /// Following step id when it is text; `None` also marks the terminal step.
    pub fn next_step(&self) -> Option<&str> {
        self.get("next_step").and_then(Value::as_str)
    }

    pub fn order(&self) -> Option<i64> {
        self.get("order").and_then(Value::as_i64)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for WorkflowStep {
    fn from(value: Value) -> Self {
        WorkflowStep(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub process: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub extracted_from: String,
    pub extraction_date: String,
    pub extractor_version: String,
}

impl Pattern {
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Every minted identity in the pattern, in a stable order.
    pub fn identities(&self) -> Vec<&str> {
        std::iter::once(self.id.as_str())
            .chain(self.agents.iter().map(|a| a.id.as_str()))
            .chain(self.tasks.iter().map(|t| t.id.as_str()))
            .chain(self.tools.iter().map(|t| t.id.as_str()))
            .chain(self.resources.iter().map(|r| r.id.as_str()))
            .collect()
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
