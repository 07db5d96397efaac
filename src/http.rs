//! HTTP fetch seam and its reqwest implementation
//!
//! The pipeline only needs authenticated GETs returning a status and a body.
//! [`HttpFetch`] captures that so the downloader can run against a scripted
//! fetcher in tests; [`ReqwestFetcher`] is the production implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Status and body of a completed GET
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// URL that was requested
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`Error::HttpStatus`] unless the status is 2xx
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::HttpStatus {
                status: self.status,
                url: self.url,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Authenticated GET capability
///
/// Implementations return `Ok` for any response the server produced, whatever
/// its status; `Err` is reserved for transport failures.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Fetch a JSON endpoint at `url`
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Fetch attachment content at `url`
    ///
    /// Bodies can be arbitrarily large, so implementations should not put a
    /// total deadline on this request. Defaults to [`HttpFetch::get`].
    async fn get_content(&self, url: &str) -> Result<HttpResponse> {
        self.get(url).await
    }
}

/// [`HttpFetch`] backed by a shared `reqwest::Client`
///
/// Every request carries `Authorization: Basic base64(username:api_token)`.
/// The configured timeout bounds connection setup for every request and the
/// whole exchange for JSON endpoints; attachment content is never cut off.
pub struct ReqwestFetcher {
    client: reqwest::Client,
    username: String,
    api_token: String,
    request_timeout: Option<Duration>,
}

impl ReqwestFetcher {
    /// Build a fetcher from the run configuration
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_credentials(&config.username, &config.api_token, config.request_timeout)
    }

    /// Build a fetcher from explicit credentials
    pub fn with_credentials(
        username: &str,
        api_token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("sprint-dl/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            username: username.to_string(),
            api_token: api_token.to_string(),
            request_timeout: timeout,
        })
    }

    async fn send(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse> {
        tracing::debug!(url, "GET");
        let mut request = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token));
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(url, status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.send(url, self.request_timeout).await
    }

    async fn get_content(&self, url: &str) -> Result<HttpResponse> {
        self.send(url, None).await
    }
}
