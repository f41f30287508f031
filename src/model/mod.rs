mod edge;
mod form;
mod graph;
mod node;

pub use edge::ActionEdge;
pub use form::ActionForm;
pub use graph::ActionGraph;
pub use node::{ActionNode, NodeData, Point, SlaDuration};
