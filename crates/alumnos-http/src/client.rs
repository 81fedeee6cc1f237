//! Students client.
//!
//! Holds the collection address and the injected transport. All network
//! behaviour lives in the backend; the client only points it at the
//! collection and fixes the decoded type.

use alumnos_core::Student;
use url::Url;

use crate::config::StudentsClientConfig;
use crate::error::HttpClientResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default students client using the reqwest HTTP backend.
pub type DefaultStudentsClient = StudentsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for a remote student collection.
///
/// Generic over an HTTP backend so any transport can be injected.
/// Use `DefaultStudentsClient` for production code.
#[derive(Debug)]
pub struct StudentsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) collection_url: Url,
}

impl DefaultStudentsClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the configured address is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(config: &StudentsClientConfig) -> HttpClientResult<Self> {
        let collection_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config.timeout)?;
        Ok(Self {
            backend,
            collection_url,
        })
    }

    /// Create a new client pointed at the default collection address.
    pub fn default_client() -> HttpClientResult<Self> {
        Self::new(&StudentsClientConfig::default())
    }
}

impl<B: HttpBackend> StudentsClient<B> {
    /// Create a new client over a custom backend.
    pub const fn with_backend(collection_url: Url, backend: B) -> Self {
        Self {
            backend,
            collection_url,
        }
    }

    /// The address every request is sent to.
    pub const fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// Issue one `GET` against the collection and decode the body.
    pub(crate) async fn get_students(&self) -> HttpClientResult<Vec<Student>> {
        self.backend.get_json(&self.collection_url).await
    }
}
