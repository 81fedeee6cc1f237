//! Public configuration for the students client.

use std::time::Duration;

/// Address of the collection when none is configured.
pub const DEFAULT_COLLECTION_URL: &str = "http://localhost:8080/alumnos";

/// Configuration for the students client.
///
/// # Example
///
/// ```
/// use alumnos_http::StudentsClientConfig;
/// use std::time::Duration;
///
/// let config = StudentsClientConfig::new()
///     .with_base_url("http://school.internal:8080/alumnos")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct StudentsClientConfig {
    /// Full URL of the student collection
    pub(crate) base_url: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for StudentsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_COLLECTION_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl StudentsClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL of the student collection.
    ///
    /// Defaults to `http://localhost:8080/alumnos`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set an optional collection URL, keeping the current one on `None`.
    #[must_use]
    pub fn with_optional_base_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured collection URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
