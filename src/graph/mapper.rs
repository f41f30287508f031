//! Projection of a raw [`ActionGraph`] into the structure consumed by the
//! drawing layer.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    graph::resolver::{DependencyData, PrerequisiteGraph},
    model::{ActionForm, ActionGraph, Point},
    store::SelectedNode,
};

/// Side of a node where an edge attaches.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HandlePosition {
    Left,
    Top,
    Right,
    Bottom,
}

/// Arrow drawn at the end of an edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerType {
    Arrow,
    #[default]
    ArrowClosed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: MarkerType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderNodeData {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub form_id: String,
    pub form_fields: Vec<String>,
    pub dependency_data: DependencyData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: String,
    pub position: Point,
    /// outgoing edges leave from this side
    pub source_position: HandlePosition,
    /// incoming edges arrive on this side
    pub target_position: HandlePosition,
    pub data: RenderNodeData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub marker_end: EdgeMarker,
}

/// Graph ready to be drawn: nodes enriched with their dependency data,
/// uniquely identified edges and the untouched form list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RenderableGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    pub forms: Vec<ActionForm>,
}

impl RenderableGraph {
    /// get node by id
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Selection payload for a click on `node_id`, as handed to
    /// [`FormStore::open_node_detail`](crate::FormStore::open_node_detail).
    ///
    /// The form name comes from the form list; a node whose form is unknown
    /// falls back to its label.
    pub fn selection(
        &self,
        node_id: &str,
    ) -> Option<SelectedNode> {
        let node = self.node(node_id)?;
        let form_name = self.forms.iter().find(|f| f.id == node.data.form_id).map(|f| f.name.clone()).unwrap_or_else(|| node.data.label.clone());

        Some(SelectedNode {
            node_id: node.id.clone(),
            form_id: node.data.form_id.clone(),
            form_name,
            form_fields: node.data.form_fields.clone(),
            dependencies: node.data.dependency_data.clone(),
        })
    }
}

/// Map a raw action graph into a [`RenderableGraph`].
///
/// Every call is a full recomputation. Unknown forms and dangling
/// prerequisites yield empty field and dependency lists instead of errors.
pub fn map_graph(graph: &ActionGraph) -> RenderableGraph {
    trace!("mapper::map_graph({}, nodes: {}, edges: {})", graph.id, graph.nodes.len(), graph.edges.len());

    let prerequisites = PrerequisiteGraph::new(graph);
    if prerequisites.has_cycle() {
        warn!("graph {} has cyclic prerequisites", graph.id);
    }

    RenderableGraph {
        nodes: map_nodes(graph, &prerequisites),
        edges: map_edges(graph),
        forms: graph.forms.clone(),
    }
}

fn map_nodes(
    graph: &ActionGraph,
    prerequisites: &PrerequisiteGraph<'_>,
) -> Vec<RenderNode> {
    graph
        .nodes
        .iter()
        .map(|node| RenderNode {
            id: node.id.clone(),
            position: node.position,
            source_position: HandlePosition::Right,
            target_position: HandlePosition::Left,
            data: RenderNodeData {
                label: node.data.name.clone(),
                kind: node.kind.clone(),
                form_id: node.data.component_id.clone(),
                form_fields: prerequisites.fields_of(&node.data.component_id),
                dependency_data: prerequisites.resolve(&node.id),
            },
        })
        .collect()
}

/// Edge ids number edges by their position in the whole edge list.
fn map_edges(graph: &ActionGraph) -> Vec<RenderEdge> {
    graph
        .edges
        .iter()
        .enumerate()
        .map(|(index, edge)| RenderEdge {
            id: format!("{}-{}-{}", edge.source, edge.target, index),
            source: edge.source.clone(),
            target: edge.target.clone(),
            marker_end: EdgeMarker::default(),
        })
        .collect()
}
