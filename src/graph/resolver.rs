//! Upstream dependency resolution over the prerequisite relation.
//!
//! A node's prerequisites are split in two groups:
//! - direct: the ids listed in its own `prerequisites`, in declared order
//! - transitive: everything else reachable through prerequisite hops
//!
//! The walk is an explicit worklist guarded by a visited set, so a cyclic
//! prerequisite relation still terminates and reports every node once.

use std::collections::{HashMap, HashSet};

use petgraph::{
    Direction,
    algo::is_cyclic_directed,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ActionForm, ActionGraph, ActionNode};

/// An upstream node whose form fields can be used as a prefill source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: String,
    pub name: String,
    pub form_id: String,
    pub form_fields: Vec<String>,
}

/// Direct and transitive dependencies of one node. The two lists are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyData {
    pub direct: Vec<Dependency>,
    pub transitive: Vec<Dependency>,
}

impl DependencyData {
    /// Direct dependencies followed by transitive ones.
    pub fn all(&self) -> Vec<Dependency> {
        self.direct.iter().chain(self.transitive.iter()).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.transitive.is_empty()
    }
}

/// Prerequisite relation of an action graph, indexed once and shared by every
/// node resolved during a mapping pass.
///
/// Edges run from a prerequisite to the node that depends on it, the same
/// direction as execution order.
pub struct PrerequisiteGraph<'a> {
    graph: DiGraph<&'a ActionNode, ()>,
    indices: HashMap<&'a str, NodeIndex>,
    forms: HashMap<&'a str, &'a ActionForm>,
}

impl<'a> PrerequisiteGraph<'a> {
    pub fn new(source: &'a ActionGraph) -> Self {
        let mut graph: DiGraph<&ActionNode, ()> = DiGraph::with_capacity(source.nodes.len(), source.edges.len());
        let mut indices = HashMap::with_capacity(source.nodes.len());

        let node_indices: Vec<NodeIndex> = source
            .nodes
            .iter()
            .map(|node| {
                let idx = graph.add_node(node);
                indices.insert(node.id.as_str(), idx);
                idx
            })
            .collect();

        for (node, idx) in source.nodes.iter().zip(node_indices) {
            for prerequisite in node.data.prerequisites.iter() {
                match indices.get(prerequisite.as_str()) {
                    Some(pre_idx) => {
                        graph.add_edge(*pre_idx, idx, ());
                    }
                    None => debug!("node {} lists unknown prerequisite {}", node.id, prerequisite),
                }
            }
        }

        let mut forms = HashMap::with_capacity(source.forms.len());
        for form in source.forms.iter() {
            forms.entry(form.id.as_str()).or_insert(form);
        }

        Self {
            graph,
            indices,
            forms,
        }
    }

    /// Whether the prerequisite relation contains a cycle.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Field names of the form `form_id`, empty when it is unknown.
    pub fn fields_of(
        &self,
        form_id: &str,
    ) -> Vec<String> {
        self.forms.get(form_id).map(|f| f.field_names()).unwrap_or_default()
    }

    /// Direct and transitive dependencies of `node_id`.
    pub fn resolve(
        &self,
        node_id: &str,
    ) -> DependencyData {
        DependencyData {
            direct: self.direct(node_id),
            transitive: self.transitive(node_id),
        }
    }

    /// Declared prerequisites of `node_id` that resolve to a node.
    pub fn direct(
        &self,
        node_id: &str,
    ) -> Vec<Dependency> {
        let Some(&idx) = self.indices.get(node_id) else {
            return Vec::new();
        };
        self.prerequisites(idx).into_iter().map(|pre| self.dependency(pre)).collect()
    }

    /// Every node reachable through prerequisite hops, minus `node_id` itself
    /// and its direct prerequisites.
    ///
    /// Results come in depth-first discovery order, visiting prerequisites in
    /// the order they are declared.
    pub fn transitive(
        &self,
        node_id: &str,
    ) -> Vec<Dependency> {
        let Some(&start) = self.indices.get(node_id) else {
            return Vec::new();
        };

        let mut worklist = self.prerequisites(start);
        let direct: HashSet<NodeIndex> = worklist.iter().copied().collect();
        let mut visited = HashSet::from([start]);
        worklist.reverse();

        let mut transitive = Vec::new();
        while let Some(idx) = worklist.pop() {
            if !visited.insert(idx) {
                continue;
            }
            if !direct.contains(&idx) {
                transitive.push(self.dependency(idx));
            }

            let next: Vec<NodeIndex> = self.prerequisites(idx).into_iter().filter(|pre| !visited.contains(pre)).collect();
            worklist.extend(next.into_iter().rev());
        }

        transitive
    }

    /// Output a human-readable representation of the prerequisite graph
    pub fn schema(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Prerequisite Graph ===".to_string());
        lines.push(format!("Nodes: {}, Links: {}", self.graph.node_count(), self.graph.edge_count()));
        lines.push(String::new());

        lines.push("--- Nodes ---".to_string());
        for idx in self.graph.node_indices() {
            let node = self.graph[idx];
            lines.push(format!("[{}] {} (type: {}, form: {})", node.id, node.data.name, node.kind, node.data.component_id));
        }
        lines.push(String::new());

        lines.push("--- Prerequisites ---".to_string());
        for idx in self.graph.node_indices() {
            let node = self.graph[idx];
            let prerequisites: Vec<&str> = self.prerequisites(idx).into_iter().map(|pre| self.graph[pre].id.as_str()).collect();
            if prerequisites.is_empty() {
                lines.push(format!("{} <- (none)", node.id));
            } else {
                lines.push(format!("{} <- {}", node.id, prerequisites.join(", ")));
            }
        }

        lines.join("\n")
    }

    /// Sources of the incoming edges of `idx`, in declared order.
    ///
    /// Edges are added in declaration order, so edge indices carry it.
    fn prerequisites(
        &self,
        idx: NodeIndex,
    ) -> Vec<NodeIndex> {
        let mut incoming: Vec<_> = self.graph.edges_directed(idx, Direction::Incoming).collect();
        incoming.sort_by_key(|edge| edge.id());
        incoming.into_iter().map(|edge| edge.source()).collect()
    }

    fn dependency(
        &self,
        idx: NodeIndex,
    ) -> Dependency {
        let node = self.graph[idx];
        Dependency {
            id: node.id.clone(),
            name: node.data.name.clone(),
            form_id: node.data.component_id.clone(),
            form_fields: self.fields_of(&node.data.component_id),
        }
    }
}

/// Resolve the dependencies of a single node.
///
/// When resolving many nodes of the same graph, build one
/// [`PrerequisiteGraph`] and call [`PrerequisiteGraph::resolve`] instead.
pub fn resolve_dependencies(
    graph: &ActionGraph,
    node_id: &str,
) -> DependencyData {
    PrerequisiteGraph::new(graph).resolve(node_id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::graph::fixtures::{chain, form, graph, node};

    fn ids(deps: &[Dependency]) -> Vec<&str> {
        deps.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_no_prerequisites() {
        let g = chain();
        let data = resolve_dependencies(&g, "node-1");
        assert!(data.direct.is_empty());
        assert!(data.transitive.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_chain_splits_direct_and_transitive() {
        let g = chain();
        let data = resolve_dependencies(&g, "node-3");
        assert_eq!(
            data.direct,
            vec![Dependency {
                id: "node-2".to_string(),
                name: "Node 2".to_string(),
                form_id: "form-2".to_string(),
                form_fields: vec!["field2".to_string()],
            }]
        );
        assert_eq!(
            data.transitive,
            vec![Dependency {
                id: "node-1".to_string(),
                name: "Node 1".to_string(),
                form_id: "form-1".to_string(),
                form_fields: vec!["field1".to_string()],
            }]
        );
    }

    #[test]
    fn test_unknown_node() {
        let g = chain();
        assert_eq!(resolve_dependencies(&g, "node-404"), DependencyData::default());
    }

    #[test]
    fn test_dangling_prerequisite_is_skipped() {
        let g = graph(json!([node("node-1", "form-1", &[]), node("node-2", "form-1", &["ghost", "node-1"])]), json!([]), json!([]));
        let data = resolve_dependencies(&g, "node-2");
        assert_eq!(ids(&data.direct), vec!["node-1"]);
        assert!(data.transitive.is_empty());
        assert!(data.direct[0].form_fields.is_empty());
    }

    #[test]
    fn test_diamond_visits_shared_ancestor_once() {
        let g = graph(
            json!([
                node("node-a", "form-1", &[]),
                node("node-b", "form-1", &["node-a"]),
                node("node-c", "form-1", &["node-a"]),
                node("node-d", "form-1", &["node-b", "node-c"]),
                node("node-e", "form-1", &["node-d"]),
            ]),
            json!([]),
            json!([form("form-1", &["x"])]),
        );
        let pg = PrerequisiteGraph::new(&g);

        let d = pg.resolve("node-d");
        assert_eq!(ids(&d.direct), vec!["node-b", "node-c"]);
        assert_eq!(ids(&d.transitive), vec!["node-a"]);

        let e = pg.resolve("node-e");
        assert_eq!(ids(&e.direct), vec!["node-d"]);
        assert_eq!(ids(&e.transitive), vec!["node-b", "node-a", "node-c"]);
    }

    #[test]
    fn test_discovery_order_follows_declared_prerequisites() {
        let g = graph(
            json!([
                node("node-a", "form-1", &[]),
                node("node-x", "form-1", &[]),
                node("node-b", "form-1", &["node-a"]),
                node("node-c", "form-1", &["node-x"]),
                node("node-d", "form-1", &["node-b", "node-c"]),
                node("node-e", "form-1", &["node-d"]),
            ]),
            json!([]),
            json!([]),
        );
        let data = resolve_dependencies(&g, "node-e");
        assert_eq!(ids(&data.transitive), vec!["node-b", "node-a", "node-c", "node-x"]);
    }

    #[test]
    fn test_direct_and_transitive_are_disjoint() {
        // node-c is both a direct prerequisite and reachable through node-b
        let g = graph(
            json!([
                node("node-a", "form-1", &[]),
                node("node-c", "form-1", &["node-a"]),
                node("node-b", "form-1", &["node-c"]),
                node("node-d", "form-1", &["node-b", "node-c"]),
            ]),
            json!([]),
            json!([]),
        );
        let pg = PrerequisiteGraph::new(&g);
        for n in ["node-a", "node-b", "node-c", "node-d"] {
            let data = pg.resolve(n);
            let direct: HashSet<&str> = ids(&data.direct).into_iter().collect();
            assert!(ids(&data.transitive).iter().all(|id| !direct.contains(id)), "overlap for {}", n);
        }
        let d = pg.resolve("node-d");
        assert_eq!(ids(&d.direct), vec!["node-b", "node-c"]);
        assert_eq!(ids(&d.transitive), vec!["node-a"]);
    }

    #[test]
    fn test_cycle_terminates_without_duplicates() {
        let g = graph(
            json!([
                node("node-1", "form-1", &["node-3"]),
                node("node-2", "form-1", &["node-1"]),
                node("node-3", "form-1", &["node-2"]),
                node("node-4", "form-1", &["node-3"]),
            ]),
            json!([]),
            json!([]),
        );
        let pg = PrerequisiteGraph::new(&g);
        assert!(pg.has_cycle());

        let one = pg.resolve("node-1");
        assert_eq!(ids(&one.direct), vec!["node-3"]);
        assert_eq!(ids(&one.transitive), vec!["node-2"]);

        let four = pg.resolve("node-4");
        assert_eq!(ids(&four.direct), vec!["node-3"]);
        assert_eq!(ids(&four.transitive), vec!["node-2", "node-1"]);
    }

    #[test]
    fn test_acyclic_chain_has_no_cycle() {
        let g = chain();
        let pg = PrerequisiteGraph::new(&g);
        assert!(!pg.has_cycle());
    }

    #[test]
    fn test_incoming_edges_keep_declared_order() {
        // declared order differs from node order, and a later node adds edges in between
        let g = graph(
            json!([
                node("node-a", "form-1", &[]),
                node("node-b", "form-1", &[]),
                node("node-c", "form-1", &["node-b"]),
                node("node-d", "form-1", &["node-c", "ghost", "node-a", "node-b"]),
                node("node-e", "form-1", &["node-d", "node-a"]),
            ]),
            json!([]),
            json!([]),
        );
        let pg = PrerequisiteGraph::new(&g);
        assert_eq!(ids(&pg.direct("node-d")), vec!["node-c", "node-a", "node-b"]);
        assert_eq!(ids(&pg.direct("node-e")), vec!["node-d", "node-a"]);
        assert_eq!(ids(&pg.transitive("node-e")), vec!["node-c", "node-b"]);

        let schema = pg.schema();
        assert!(schema.contains("Nodes: 5, Links: 6"));
        assert!(schema.contains("node-d <- node-c, node-a, node-b"));
    }

    #[test]
    fn test_schema_lists_prerequisites() {
        let g = chain();
        let schema = PrerequisiteGraph::new(&g).schema();
        assert!(schema.contains("Nodes: 3, Links: 2"));
        assert!(schema.contains("node-1 <- (none)"));
        assert!(schema.contains("node-3 <- node-2"));
    }
}
