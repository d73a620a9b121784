use agentic_patterns::core::identity::{has_prefix, SequentialIdSource, AGENT_PREFIX, TASK_PREFIX};
use agentic_patterns::core::normalize::entities::TASK_TITLE_CHARS;
use agentic_patterns::core::normalize::{
    normalize_agents, normalize_resources, normalize_tasks, normalize_team, normalize_tools,
    normalize_workflow,
};
use agentic_patterns::core::RawPattern;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawPattern {
    RawPattern::from_value(value).unwrap()
}

#[test]
fn test_agents_keep_input_order_and_get_distinct_ids() {
    let input = raw(json!({"agents": [
        {"name": "Planner"},
        {"name": "Researcher"},
        {"name": "Writer"}
    ]}));
    let ids = SequentialIdSource::new();
    let agents = normalize_agents(&input.record().records("agents").unwrap(), &ids).unwrap();

    let names: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Planner", "Researcher", "Writer"]);
    assert!(agents.iter().all(|a| has_prefix(&a.id, AGENT_PREFIX)));
    assert_ne!(agents[0].id, agents[1].id);
    assert_ne!(agents[1].id, agents[2].id);
}

#[test]
fn test_agent_defaults_when_keys_are_absent() {
    let input = raw(json!({"agents": [{}]}));
    let agents = normalize_agents(
        &input.record().records("agents").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();

    let agent = &agents[0];
    assert_eq!(agent.name, "Agent");
    assert_eq!(agent.role, "");
    assert_eq!(agent.goal, "");
    assert!(agent.tasks.is_empty());
    assert!(agent.tools.is_empty());
    assert_eq!(agent.language_model, None);
    assert!(!agent.memory);
    assert_eq!(agent.human_input_mode, None);
}

#[test]
fn test_language_model_priority() {
    let input = raw(json!({"agents": [
        {"llm": "gpt-4", "model": "claude", "language_model": "mistral"},
        {"model": "claude", "language_model": "mistral"},
        {"language_model": "mistral"},
        {"llm": null, "model": "claude"}
    ]}));
    let agents = normalize_agents(
        &input.record().records("agents").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();

    let models: Vec<Option<&str>> = agents.iter().map(|a| a.language_model.as_deref()).collect();
    assert_eq!(
        models,
        [Some("gpt-4"), Some("claude"), Some("mistral"), Some("claude")]
    );
}

#[test]
fn test_agent_references_are_copied_verbatim() {
    let input = raw(json!({"agents": [{
        "name": "Researcher",
        "tasks": ["collect sources", "summarize"],
        "tools": "search",
        "memory": true,
        "humanInputMode": "NEVER"
    }]}));
    let agents = normalize_agents(
        &input.record().records("agents").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();

    assert_eq!(agents[0].tasks, ["collect sources", "summarize"]);
    assert_eq!(agents[0].tools, ["search"]);
    assert!(agents[0].memory);
    assert_eq!(agents[0].human_input_mode.as_deref(), Some("NEVER"));
}

#[test]
fn test_non_text_agent_name_is_rejected_with_field_path() {
    let input = raw(json!({"agents": [{"name": "ok"}, {"name": ["not", "text"]}]}));
    let err = normalize_agents(
        &input.record().records("agents").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap_err();
    assert_eq!(err.field(), "agents[1].name");
}

#[test]
fn test_task_title_truncates_description() {
    let description = "Investigate the current state of retrieval augmented generation research";
    let input = raw(json!({"tasks": [
        {"description": description, "agent": "Researcher"},
        {"title": "Write", "description": "Draft the report"},
        {}
    ]}));
    let tasks = normalize_tasks(
        &input.record().records("tasks").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();

    let expected: String = description.chars().take(TASK_TITLE_CHARS).collect();
    assert_eq!(tasks[0].title, expected);
    assert_eq!(tasks[0].title.chars().count(), 50);
    assert_eq!(tasks[0].assigned_agent, "Researcher");
    assert_eq!(tasks[1].title, "Write");
    assert_eq!(tasks[1].assigned_agent, "");
    assert_eq!(tasks[2].title, "Task");
    assert!(tasks.iter().all(|t| has_prefix(&t.id, TASK_PREFIX)));
}

#[test]
fn test_task_title_counts_characters_not_bytes() {
    let description = "é".repeat(60);
    let input = raw(json!({"tasks": [{"description": description}]}));
    let tasks = normalize_tasks(
        &input.record().records("tasks").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();
    assert_eq!(tasks[0].title, "é".repeat(50));
}

#[test]
fn test_task_accepts_assigned_agent_alias() {
    let input = raw(json!({"tasks": [{"assigned_agent": "Writer"}]}));
    let tasks = normalize_tasks(
        &input.record().records("tasks").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();
    assert_eq!(tasks[0].assigned_agent, "Writer");
}

#[test]
fn test_tools_and_resources_defaults() {
    let input = raw(json!({
        "tools": [{"type": "function"}, {"name": "search", "resource": "web"}],
        "resources": [{"type": "file", "description": "notes"}]
    }));
    let ids = SequentialIdSource::new();
    let tools = normalize_tools(&input.record().records("tools").unwrap(), &ids).unwrap();
    let resources =
        normalize_resources(&input.record().records("resources").unwrap(), &ids).unwrap();

    assert_eq!(tools[0].name, "Tool");
    assert_eq!(tools[0].kind, "function");
    assert_eq!(tools[1].name, "search");
    assert_eq!(tools[1].resource, "web");
    assert_eq!(resources[0].name, "Resource");
    assert_eq!(resources[0].kind, "file");
    assert_eq!(resources[0].description, "notes");
}

#[test]
fn test_workflow_and_team_defaults() {
    let input = RawPattern::default();
    let record = input.record();
    let workflow = normalize_workflow(&record.record("workflow").unwrap()).unwrap();
    let team = normalize_team(&record.record("team").unwrap()).unwrap();

    assert_eq!(workflow.kind, "Sequential");
    assert!(workflow.steps.is_empty());
    assert_eq!(team.name, "");
    assert_eq!(team.process, "sequential");
}

#[test]
fn test_workflow_steps_are_copied_verbatim() {
    let steps = json!([
        {"id": 1, "order": 1, "task_id": "task_x", "next_step": 2},
        {"id": "s2", "task_id": null, "condition": "always"},
        "write"
    ]);
    let input = raw(json!({"workflow": {"steps": steps.clone()}}));
    let workflow = normalize_workflow(&input.record().record("workflow").unwrap()).unwrap();

    assert_eq!(workflow.steps.len(), 3);
    assert_eq!(workflow.steps[0].order(), Some(1));
    assert_eq!(workflow.steps[0].get("next_step"), Some(&json!(2)));
    assert_eq!(workflow.steps[1].id(), Some("s2"));
    assert_eq!(workflow.steps[1].get("task_id"), Some(&serde_json::Value::Null));
    assert_eq!(workflow.steps[1].get("next_step"), None);

    let original = serde_json::to_string(&steps).unwrap();
    let serialized = serde_json::to_string(&workflow.steps).unwrap();
    assert_eq!(serialized, original);
}

#[test]
fn test_agent_tools_listed_as_mappings_are_kept() {
    let input = raw(json!({"agents": [{
        "role": "R",
        "tools": [{"name": "search", "args": {"limit": 5}}, "scrape"]
    }]}));
    let agents = normalize_agents(
        &input.record().records("agents").unwrap(),
        &SequentialIdSource::new(),
    )
    .unwrap();

    assert_eq!(agents[0].name, "R");
    assert_eq!(
        agents[0].tools,
        vec![json!({"name": "search", "args": {"limit": 5}}), json!("scrape")]
    );
}
