use std::time::Duration;

use crate::{
    ActgraphError, Config, Result,
    api::{CachedGraphSource, HttpGraphSource},
};

pub struct GraphClientBuilder {
    base_url: String,
    timeout_ms: u64,
    api_key: Option<String>,
    cache_capacity: u64,
}

impl Default for GraphClientBuilder {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GraphClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            timeout_ms: config.api.timeout_ms,
            api_key: config.api.api_key.clone(),
            cache_capacity: config.cache_capacity,
        }
    }

    pub fn base_url(
        mut self,
        base_url: &str,
    ) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn timeout_ms(
        mut self,
        timeout_ms: u64,
    ) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn api_key(
        mut self,
        api_key: &str,
    ) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn cache_capacity(
        mut self,
        capacity: u64,
    ) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn build(&self) -> Result<HttpGraphSource> {
        if self.base_url.is_empty() {
            return Err(ActgraphError::Config("base url must not be empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .map_err(|err| ActgraphError::Config(format!("failed to build http client: {}", err)))?;

        Ok(HttpGraphSource::new(client, self.base_url.clone(), self.api_key.clone()))
    }

    /// Same as [`build`](Self::build), wrapped in a graph cache.
    pub fn build_cached(&self) -> Result<CachedGraphSource<HttpGraphSource>> {
        Ok(CachedGraphSource::new(self.build()?, self.cache_capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_from_config() {
        let config = Config::load_from_str("cache_capacity = 2\n[api]\nbase_url = \"https://graphs.example.com\"").unwrap();
        let source = GraphClientBuilder::from_config(&config).build_cached().unwrap();
        assert_eq!(source.inner().base_url(), "https://graphs.example.com");
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        assert!(matches!(GraphClientBuilder::new().base_url("").build(), Err(ActgraphError::Config(_))));
    }
}
