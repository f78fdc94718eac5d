use crate::domain::model::MoldCandidate;
use crate::domain::ports::MoldCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Mold catalog backed by a hosted-Postgres REST endpoint. The active-only
/// predicate is pushed to the store as a query parameter; no other filtering
/// happens server-side.
pub struct RestCatalog {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RestCatalog {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl MoldCatalog for RestCatalog {
    async fn list_active(&self) -> Result<Vec<MoldCandidate>> {
        tracing::debug!("requesting active molds from {}", self.endpoint);

        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*"), ("is_active", "eq.true")]);

        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        let molds: Vec<MoldCandidate> = response.json().await?;

        tracing::debug!("catalog responded with {} molds", molds.len());
        Ok(molds)
    }
}
