//! Heimdahl API client.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::filters::{EventFilters, ResourceFilters, SwapFilters, TransferFilters};
use crate::pagination::{collect_pages, PageRequest};
use crate::records::{Record, RecordBatch};

/// Default Heimdahl API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.heimdahl.xyz/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "HEIMDAHL_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "HEIMDAHL_API_URL";

/// Configuration for the API client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Custom API base URL; [`DEFAULT_API_URL`] when unset.
    pub base_url: Option<Url>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url())
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// API base URL that endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref().map_or(DEFAULT_API_URL, Url::as_str)
    }

    /// Read the configuration from `HEIMDAHL_API_KEY` and, if set,
    /// `HEIMDAHL_API_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ApiError::Config(format!("{API_KEY_ENV} is not set")))?;
        let config = Self::new(api_key);

        match std::env::var(API_URL_ENV) {
            Ok(url) => {
                let url = Url::parse(&url)
                    .map_err(|e| ApiError::Config(format!("invalid {API_URL_ENV}: {e}")))?;
                Ok(config.with_base_url(url))
            }
            Err(_) => Ok(config),
        }
    }

    /// Set a custom API base URL.
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }
}

/// Client for the Heimdahl swap, transfer and event endpoints.
///
/// Authentication headers are fixed when the client is built. The underlying
/// `reqwest::Client` is safe to share across tasks, but the paginating
/// helpers never have more than one request in flight. Clones share one
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use heimdahl_api::{HeimdahlClient, PageRequest, SwapFilters};
///
/// #[tokio::main]
/// async fn main() -> Result<(), heimdahl_api::ApiError> {
///     let client = HeimdahlClient::new("pk_...")?;
///
///     let filters = SwapFilters::new().chain("ethereum").pair("USDC", "WETH");
///     let swaps = client.get_swaps(&filters, PageRequest::first(5)).await?;
///
///     let all = client
///         .search_swaps_by_token_pair("USDC", "WETH", SwapFilters::new(), 250)
///         .await?;
///
///     client.close();
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HeimdahlClient {
    http_client: Client,
    config: ClientConfig,
}

impl HeimdahlClient {
    /// Create a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ApiError::Config(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET to `{base_url}/{endpoint}` and decode the JSON body.
    pub async fn execute(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!(
            "{}/{}",
            self.config.base_url().trim_end_matches('/'),
            endpoint
        );
        debug!(%url, ?query, "GET");

        let mut request = self.http_client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %endpoint, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a resource. Pagination parameters are only sent to paginated
    /// endpoints.
    pub async fn fetch(&self, filters: &ResourceFilters, page: PageRequest) -> Result<Value> {
        let endpoint = filters.endpoint();
        if filters.is_paginated() {
            self.execute(&endpoint, &page.query_params()).await
        } else {
            self.execute(&endpoint, &[]).await
        }
    }

    async fn fetch_records(
        &self,
        filters: &ResourceFilters,
        page: PageRequest,
    ) -> Result<Vec<Record>> {
        let body = self.fetch(filters, page).await?;
        Ok(RecordBatch::from_body(body)?.into_records())
    }

    /// Get one page of swaps.
    pub async fn get_swaps(&self, filters: &SwapFilters, page: PageRequest) -> Result<Value> {
        self.fetch(&ResourceFilters::Swap(filters.clone()), page)
            .await
    }

    /// Get one page of token transfers.
    pub async fn get_transfers(
        &self,
        filters: &TransferFilters,
        page: PageRequest,
    ) -> Result<Value> {
        self.fetch(&ResourceFilters::Transfer(filters.clone()), page)
            .await
    }

    /// Get raw events for a contract. The endpoint is not paginated.
    pub async fn get_events(&self, filters: &EventFilters) -> Result<Value> {
        self.fetch(&ResourceFilters::Event(filters.clone()), PageRequest::default())
            .await
    }

    /// Collect up to `limit` swaps between two tokens.
    ///
    /// `filters` supplies chain, network and size bucket; its tokens are
    /// replaced by `token1` and `token2`.
    pub async fn search_swaps_by_token_pair(
        &self,
        token1: impl Into<String>,
        token2: impl Into<String>,
        filters: SwapFilters,
        limit: usize,
    ) -> Result<Vec<Record>> {
        let filters = ResourceFilters::Swap(filters.pair(token1, token2));
        let filters = &filters;
        collect_pages(limit, move |page| self.fetch_records(filters, page)).await
    }

    /// Collect up to `limit` transfers of a token.
    ///
    /// `filters` supplies chain, network and the optional addresses; its token
    /// is replaced by `token`.
    pub async fn get_token_transfers(
        &self,
        token: impl Into<String>,
        filters: TransferFilters,
        limit: usize,
    ) -> Result<Vec<Record>> {
        let filters = ResourceFilters::Transfer(filters.token(token));
        let filters = &filters;
        collect_pages(limit, move |page| self.fetch_records(filters, page)).await
    }

    /// Drop this handle. The connection pool is released once the last clone
    /// is closed or dropped; clones that are still alive keep working.
    pub fn close(self) {
        debug!(base_url = %self.config.base_url(), "closing client handle");
    }
}
