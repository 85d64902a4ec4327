use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::api::error::FetchError;
use crate::api::types::SearchPage;
use crate::config::ApiConfig;

/// Async client for the search endpoint.
///
/// Anything short of a 2xx response with a decodable body is a
/// [`FetchError`]; partial results are never returned.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    request_timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(concat!("hackerstories/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    /// GET `url` and decode a [`SearchPage`].
    pub async fn fetch(&self, url: &str) -> Result<SearchPage, FetchError> {
        match timeout(self.request_timeout, self.do_fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_fetch(&self, url: &str) -> Result<SearchPage, FetchError> {
        tracing::info!(url, "fetching stories");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Connection)?;
        let page: SearchPage = serde_json::from_slice(&body)?;
        tracing::debug!(hits = page.hits.len(), page = page.page, "stories fetched");
        Ok(page)
    }
}
