use super::models::Issue;
use crate::error::{fetch_error, CalendarResult};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Fixed path of the issue endpoint
pub const ISSUES_PATH: &str = "/api/issues";

/// Source of issue records
#[async_trait]
pub trait IssueFetcher: Send + Sync {
    /// Fetch the full issue collection
    async fn fetch_issues(&self) -> CalendarResult<Vec<Issue>>;
}

#[async_trait]
impl<T: IssueFetcher + ?Sized> IssueFetcher for Arc<T> {
    async fn fetch_issues(&self) -> CalendarResult<Vec<Issue>> {
        (**self).fetch_issues().await
    }
}

/// Fetches issues with a single GET against the issue endpoint
#[derive(Debug, Clone)]
pub struct HttpIssueFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpIssueFetcher {
    /// Create a fetcher for the server at `base_url`
    pub fn new(base_url: &Url) -> CalendarResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a fetcher that reuses an existing client
    pub fn with_client(client: Client, base_url: &Url) -> CalendarResult<Self> {
        let endpoint = base_url
            .join(ISSUES_PATH)
            .map_err(|e| fetch_error(&format!("Failed to build endpoint URL: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Resolved endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl IssueFetcher for HttpIssueFetcher {
    async fn fetch_issues(&self) -> CalendarResult<Vec<Issue>> {
        debug!("Fetching issues from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| fetch_error(&format!("Failed to fetch issues: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(fetch_error(&format!(
                "Failed to fetch issues: HTTP {} - {}",
                status, error_body
            )));
        }

        let body = response.bytes().await?;
        let issues: Vec<Issue> = serde_json::from_slice(&body)?;

        info!("Fetched {} issues", issues.len());
        Ok(issues)
    }
}
