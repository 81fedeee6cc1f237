//! HTTP backend abstraction.
//!
//! The client talks to the network only through `HttpBackend`, so the
//! transport can be swapped for a fake in tests or for another client in
//! production. The reqwest implementation sends a bare `GET` and does not
//! retry.

use crate::error::{HttpClientError, HttpClientResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// Implementations must not do any work before the returned future is
/// polled, and must release the in-flight request when that future is
/// dropped.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpClientResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
#[derive(Debug)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given request timeout.
    pub fn new(timeout: Duration) -> HttpClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpClientResult<T> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Request failed");
            return Err(HttpClientError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Decode separately so a bad body surfaces as JsonParse, not Network
        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
