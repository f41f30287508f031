//! Dependency resolution and projection of the raw action graph.
//!
//! Everything in this module is a pure function of its input graph: no I/O,
//! no shared state and no error paths. Malformed references degrade to empty
//! results.

mod fields;
mod mapper;
mod resolver;

#[cfg(test)]
pub(crate) mod fixtures;

pub use fields::fields_of;
pub use mapper::{EdgeMarker, HandlePosition, MarkerType, RenderEdge, RenderNode, RenderNodeData, RenderableGraph, map_graph};
pub use resolver::{Dependency, DependencyData, PrerequisiteGraph, resolve_dependencies};
