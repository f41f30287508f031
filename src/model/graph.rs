use serde::{Deserialize, Serialize};

use crate::{
    ActgraphError, Result,
    model::{ActionEdge, ActionForm, ActionNode},
};

/// Raw action graph as delivered by the blueprint graph endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionGraph {
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub nodes: Vec<ActionNode>,
    #[serde(default)]
    pub edges: Vec<ActionEdge>,
    #[serde(default)]
    pub forms: Vec<ActionForm>,
}

impl ActionGraph {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str::<ActionGraph>(s).map_err(|e| ActgraphError::Convert(format!("invalid action graph: {}", e)))
    }

    /// get form by id
    pub fn form(
        &self,
        id: &str,
    ) -> Option<&ActionForm> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// get node by id
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&ActionNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
