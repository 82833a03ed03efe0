//! HTTP ingestion client.

use crate::envelope::{
    EventTypesUpsertRequest, EventsBatchRequest, ItemsUpsertRequest, UsersUpsertRequest,
};
use crate::error::IngestError;
use crate::sink::IngestSink;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const EVENT_TYPES_UPSERT_PATH: &str = "v1/event-types:upsert";
pub const USERS_UPSERT_PATH: &str = "v1/users:upsert";
pub const ITEMS_UPSERT_PATH: &str = "v1/items:upsert";
pub const EVENTS_BATCH_PATH: &str = "v1/events:batch";

/// Ingestion client that POSTs JSON envelopes to the backend.
///
/// # Example
///
/// ```ignore
/// let client = HttpIngestClient::new("http://localhost:8081")?;
/// client.upsert_users(&UsersUpsertRequest { namespace: "demo", users: &users }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpIngestClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIngestClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: &str) -> Result<Self, IngestError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, IngestError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| IngestError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(IngestError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(), IngestError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("POST {} failed with status {}: {}", url, status, body);
            return Err(IngestError::from_status(status.as_u16(), body));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl IngestSink for HttpIngestClient {
    async fn upsert_event_types(
        &self,
        request: &EventTypesUpsertRequest<'_>,
    ) -> Result<(), IngestError> {
        self.post_json(EVENT_TYPES_UPSERT_PATH, request).await
    }

    async fn upsert_users(&self, request: &UsersUpsertRequest<'_>) -> Result<(), IngestError> {
        self.post_json(USERS_UPSERT_PATH, request).await
    }

    async fn upsert_items(&self, request: &ItemsUpsertRequest<'_>) -> Result<(), IngestError> {
        self.post_json(ITEMS_UPSERT_PATH, request).await
    }

    async fn batch_events(&self, request: &EventsBatchRequest<'_>) -> Result<(), IngestError> {
        self.post_json(EVENTS_BATCH_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = HttpIngestClient::new("http://localhost:8081/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081");
        assert_eq!(
            client.endpoint(USERS_UPSERT_PATH),
            "http://localhost:8081/v1/users:upsert"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = HttpIngestClient::new("https://api.example.com/recsys").unwrap();
        assert_eq!(
            client.endpoint(EVENTS_BATCH_PATH),
            "https://api.example.com/recsys/v1/events:batch"
        );
    }

    #[test]
    fn test_rejects_invalid_urls() {
        assert!(matches!(
            HttpIngestClient::new("not a url"),
            Err(IngestError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpIngestClient::new("ftp://example.com"),
            Err(IngestError::InvalidUrl { .. })
        ));
    }
}
