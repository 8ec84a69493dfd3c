//! HTTP client and single-page fetch
//!
//! Wraps a shared `reqwest::Client` connection pool and handles:
//! - Base URL resolution for relative API paths
//! - Classifying responses into [`RequestOutcome`]s
//! - Decoding JSON bodies and parsing the `link` header
//!
//! There is no retry, backoff or rate limiting: every failure is returned to
//! the caller as soon as it is seen.

use crate::error::{Error, Result};
use crate::pagination::{parse_link_header, LinkHeaderPaginator, RequestOutcome};
use reqwest::header::LINK;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative paths are resolved against
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("extralife-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for the Extra Life API
///
/// Cloning is cheap and clones share one connection pool, so a single
/// client can serve concurrent calls.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Wrap an existing `reqwest` client, e.g. one shared with the rest of an application
    pub fn from_client(client: Client, config: HttpClientConfig) -> Self {
        Self { client, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Issue one GET and return the raw response, whatever its status
    pub async fn get(&self, url: &str) -> Result<Response> {
        let full_url = self.build_url(url);

        let mut req = self.client.get(&full_url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        debug!("GET {}", full_url);
        Ok(req.send().await?)
    }

    /// Perform exactly one GET and classify the response
    ///
    /// - 404 → [`RequestOutcome::NotFound`]
    /// - other non-2xx → [`RequestOutcome::Failure`] with the status and reason phrase
    /// - 2xx → body decoded as `T`, plus the parsed `link` header
    ///
    /// A 2xx body that does not decode as `T` is an [`Error::Decode`].
    pub async fn fetch_single_page<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<RequestOutcome<T>> {
        let response = self.get(url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("{} returned 404, treating as absent", response.url());
            return Ok(RequestOutcome::NotFound);
        }

        if !status.is_success() {
            let reason = match status.canonical_reason() {
                Some(reason) => reason.to_string(),
                None => match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Failed to read body of {} response: {}", status.as_u16(), e);
                        String::new()
                    }
                },
            };
            warn!("Request failed with {}: {}", status.as_u16(), reason);
            return Ok(RequestOutcome::Failure {
                status: status.as_u16(),
                reason,
            });
        }

        // HeaderMap::get is case-insensitive and yields the first value when repeated
        let links = parse_link_header(
            response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok()),
        );

        let source = response.url().to_string();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| Error::decode(format!("{source}: {e}")))?;

        Ok(RequestOutcome::Success { body, links })
    }

    /// Fetch one resource, mapping 404 to `None`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        self.fetch_single_page(url).await?.into_option()
    }

    /// Follow `next` links from `url` and return every item across all pages
    ///
    /// 404 yields an empty `Vec`. Any other failure aborts the walk and
    /// discards what was collected.
    pub async fn fetch_all<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        LinkHeaderPaginator::new().collect(self, url).await
    }

    /// Like [`fetch_all`](Self::fetch_all), but refuses to fetch more than `max_pages` pages
    ///
    /// `max_pages` must be at least one; zero fails with [`Error::Config`] before any request.
    pub async fn fetch_all_bounded<T: DeserializeOwned>(
        &self,
        url: &str,
        max_pages: u32,
    ) -> Result<Vec<T>> {
        LinkHeaderPaginator::with_max_pages(max_pages)
            .collect(self, url)
            .await
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
