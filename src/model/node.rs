use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaDuration {
    pub number: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    #[serde(default)]
    pub component_key: String,
    #[serde(default)]
    pub component_type: String,
    /// id of the form this node renders
    pub component_id: String,
    pub name: String,
    /// ids of the nodes that must complete before this one, `null` reads as none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub sla_duration: SlaDuration,
    #[serde(default)]
    pub approval_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: Point,
    pub data: NodeData,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
