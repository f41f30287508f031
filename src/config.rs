use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ActgraphError, Result, catalog::GlobalDataSource};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// graph endpoint config
    #[serde(default)]
    pub api: ApiConfig,
    /// max number of fetched graphs kept in the cache, defaults to 64
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// replaces the built-in global data sources when present
    #[serde(default)]
    pub global_sources: Option<Vec<GlobalDataSource>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// base url the blueprint graph route is appended to
    pub base_url: String,
    /// request timeout in milliseconds, defaults to 10000
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// sent as a bearer token when set
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_cache_capacity() -> u64 {
    64
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: default_timeout_ms(),
            api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            cache_capacity: default_cache_capacity(),
            global_sources: None,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|e| ActgraphError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        if config.api.base_url.is_empty() {
            return Err(ActgraphError::Config("api.base_url must not be empty".into()));
        }
        Ok(config)
    }

    /// Global data sources from the config, or the built-in catalog.
    pub fn global_sources(&self) -> Vec<GlobalDataSource> {
        self.global_sources.clone().unwrap_or_else(crate::catalog::default_sources)
    }
}
