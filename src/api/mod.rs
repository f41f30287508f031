//! Fetching raw action graphs.
//!
//! This is the only asynchronous boundary of the crate. A [`GraphSource`]
//! delivers a complete [`ActionGraph`] or an error; mapping happens after the
//! fetch has finished.

mod cache;
mod http;
pub mod routes;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Result, graph::RenderableGraph, model::ActionGraph};

pub use cache::CachedGraphSource;
pub use http::HttpGraphSource;

/// Identifies one blueprint graph of one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphKey {
    pub tenant_id: String,
    pub blueprint_id: String,
}

impl GraphKey {
    pub fn new(
        tenant_id: impl Into<String>,
        blueprint_id: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            blueprint_id: blueprint_id.into(),
        }
    }

    /// Resource path of this graph relative to the API base url.
    pub fn path(&self) -> String {
        routes::blueprint_graph(&self.tenant_id, &self.blueprint_id)
    }
}

#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Fetches the raw graph identified by `key`.
    async fn fetch(
        &self,
        key: &GraphKey,
    ) -> Result<ActionGraph>;
}

/// Fetch the graph for `key` and map it for rendering.
pub async fn load_mapped<S: GraphSource + ?Sized>(
    source: &S,
    key: &GraphKey,
) -> Result<RenderableGraph> {
    let graph = source.fetch(key).await?;
    info!("loaded graph {} ({} nodes) for {}", graph.id, graph.nodes.len(), key.path());
    Ok(crate::graph::map_graph(&graph))
}
