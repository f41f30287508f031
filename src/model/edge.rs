use serde::{Deserialize, Serialize};

/// Execution-order edge between two nodes. Parallel edges are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionEdge {
    pub source: String,
    pub target: String,
}
