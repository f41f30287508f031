use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue, InvalidHeaderValue};
use tracing::{error, trace};

use crate::{
    ActgraphError, Result,
    api::{GraphKey, GraphSource},
    model::ActionGraph,
};

/// Fetches graphs from the actions API over HTTP.
///
/// Build one with [`GraphClientBuilder`](crate::GraphClientBuilder).
#[derive(Debug, Clone)]
pub struct HttpGraphSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGraphSource {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute url of the graph identified by `key`.
    pub fn url(
        &self,
        key: &GraphKey,
    ) -> String {
        format!("{}{}", self.base_url, key.path())
    }
}

#[async_trait]
impl GraphSource for HttpGraphSource {
    async fn fetch(
        &self,
        key: &GraphKey,
    ) -> Result<ActionGraph> {
        let url = self.url(key);
        trace!("http::fetch({})", url);

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            let value: HeaderValue = format!("Bearer {}", api_key).parse().map_err(|err: InvalidHeaderValue| ActgraphError::Config(err.to_string()))?;
            request = request.header(AUTHORIZATION, value);
        }

        let res = request.send().await.map_err(|err| {
            error!("fetching {} failed: {}", url, err);
            ActgraphError::from(err)
        })?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.ok().filter(|t| !t.is_empty()).unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            error!("fetching {} returned {}", url, status);
            return Err(ActgraphError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = res.bytes().await?;
        let graph = serde_json::from_slice::<ActionGraph>(&body)?;
        Ok(graph)
    }
}
