//! JSON builders shared by the graph and store tests.

use serde_json::{Value as JsonValue, json};

use crate::model::ActionGraph;

pub fn node(
    id: &str,
    form_id: &str,
    prerequisites: &[&str],
) -> JsonValue {
    let n: String = id.trim_start_matches("node-").to_string();
    json!({
        "id": id,
        "type": "action",
        "position": { "x": 0, "y": 0 },
        "data": {
            "id": id,
            "component_key": format!("key-{}", n),
            "component_type": "form",
            "component_id": form_id,
            "name": format!("Node {}", n),
            "prerequisites": prerequisites,
            "sla_duration": { "number": 1, "unit": "day" },
            "approval_required": false,
        },
    })
}

pub fn form(
    id: &str,
    fields: &[&str],
) -> JsonValue {
    let properties: serde_json::Map<String, JsonValue> = fields.iter().map(|f| (f.to_string(), json!({ "type": "string" }))).collect();
    json!({
        "id": id,
        "name": format!("Form {}", id.trim_start_matches("form-")),
        "description": "test form",
        "is_reusable": false,
        "field_schema": { "properties": properties },
        "ui_schema": {},
        "dynamic_field_config": {},
    })
}

pub fn edge(
    source: &str,
    target: &str,
) -> JsonValue {
    json!({ "source": source, "target": target })
}

pub fn graph(
    nodes: JsonValue,
    edges: JsonValue,
    forms: JsonValue,
) -> ActionGraph {
    serde_json::from_value(json!({
        "id": "graph-1",
        "tenant_id": "tenant-1",
        "name": "Test Graph",
        "description": "Test",
        "category": "test",
        "nodes": nodes,
        "edges": edges,
        "forms": forms,
    }))
    .unwrap()
}

/// node-1 -> node-2 -> node-3, one form per node.
pub fn chain() -> ActionGraph {
    graph(
        json!([node("node-1", "form-1", &[]), node("node-2", "form-2", &["node-1"]), node("node-3", "form-3", &["node-2"])]),
        json!([edge("node-1", "node-2"), edge("node-2", "node-3")]),
        json!([form("form-1", &["field1"]), form("form-2", &["field2"]), form("form-3", &["field3"])]),
    )
}
