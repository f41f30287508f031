//! # Actgraph
//!
//! Actgraph turns a form-based action graph into something a UI can draw and
//! lets that UI record, per node and per form field, where the field should be
//! prefilled from.
//!
//! ## Core Features
//!
//! - **Dependency Resolution**: direct and transitive upstream dependencies of every node, cycle-safe
//! - **Graph Mapping**: a pure projection of the raw graph into positioned nodes and uniquely identified edges
//! - **Form State Store**: command-driven per-node field values and prefill mappings
//! - **Graph Fetching**: async HTTP source with an in-memory cache
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use actgraph::{ActionGraph, FieldMapping, FormStore, map_graph};
//!
//! let graph = ActionGraph::from_json(json_str)?;
//! let rendered = map_graph(&graph);
//!
//! let mut store = FormStore::new();
//! store.open_node_detail(rendered.selection("node-3").unwrap());
//! store.open_picker_for("email");
//! store.commit_field_mapping(Some(FieldMapping::new("form-1", "Node 1", "email")));
//! ```

mod api;
mod builder;
mod catalog;
mod config;
mod error;
mod graph;
mod model;
mod store;

pub use api::{CachedGraphSource, GraphKey, GraphSource, HttpGraphSource, load_mapped, routes};
pub use builder::GraphClientBuilder;
pub use catalog::{GlobalDataSource, MappingSource, SourceKind, default_sources, filter_fields, mapping_sources};
pub use config::{ApiConfig, Config};
pub use error::ActgraphError;
pub use graph::*;
pub use model::*;
pub use store::*;

/// Result type alias for Actgraph operations.
pub type Result<T> = std::result::Result<T, ActgraphError>;
