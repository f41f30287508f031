//! Cache of fetched graphs keyed by tenant and blueprint.
//!
//! Uses moka's concurrent cache, evicting least recently used graphs once
//! the capacity is exceeded.

use std::sync::Arc;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::trace;

use crate::{
    Result,
    api::{GraphKey, GraphSource},
    model::ActionGraph,
};

/// Wraps a [`GraphSource`] and serves repeated fetches from memory.
///
/// Failed fetches are not cached.
pub struct CachedGraphSource<S> {
    inner: S,
    graphs: Cache<GraphKey, Arc<ActionGraph>>,
}

impl<S: GraphSource> CachedGraphSource<S> {
    pub fn new(
        inner: S,
        capacity: u64,
    ) -> Self {
        Self {
            inner,
            graphs: Cache::new(capacity),
        }
    }

    /// Drop the cached graph of `key`, the next fetch goes to the inner source.
    pub fn invalidate(
        &self,
        key: &GraphKey,
    ) {
        self.graphs.invalidate(key);
    }

    pub fn contains(
        &self,
        key: &GraphKey,
    ) -> bool {
        self.graphs.contains_key(key)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: GraphSource> GraphSource for CachedGraphSource<S> {
    async fn fetch(
        &self,
        key: &GraphKey,
    ) -> Result<ActionGraph> {
        if let Some(graph) = self.graphs.get(key) {
            trace!("cache::hit({})", key.path());
            return Ok(graph.as_ref().clone());
        }
        let graph = self.inner.fetch(key).await?;
        self.graphs.insert(key.clone(), Arc::new(graph.clone()));
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::testing::StaticSource, graph::fixtures::chain};

    #[tokio::test]
    async fn test_second_fetch_is_cached() {
        let cached = CachedGraphSource::new(StaticSource::new(Some(chain())), 4);
        let key = GraphKey::new("tenant-1", "blueprint-1");

        let first = cached.fetch(&key).await.unwrap();
        let second = cached.fetch(&key).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(cached.inner().calls(), 1);
        assert!(cached.contains(&key));

        cached.fetch(&GraphKey::new("tenant-1", "blueprint-2")).await.unwrap();
        assert_eq!(cached.inner().calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_refetches() {
        let cached = CachedGraphSource::new(StaticSource::new(Some(chain())), 4);
        let key = GraphKey::new("tenant-1", "blueprint-1");

        cached.fetch(&key).await.unwrap();
        cached.invalidate(&key);
        assert!(!cached.contains(&key));
        cached.fetch(&key).await.unwrap();
        assert_eq!(cached.inner().calls(), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cached = CachedGraphSource::new(StaticSource::new(None), 4);
        let key = GraphKey::new("tenant-1", "blueprint-1");

        assert!(cached.fetch(&key).await.is_err());
        assert!(cached.fetch(&key).await.is_err());
        assert_eq!(cached.inner().calls(), 2);
        assert!(!cached.contains(&key));
    }
}
