#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultStudentsClient, StudentsClient};

// Configuration
pub use config::{DEFAULT_COLLECTION_URL, StudentsClientConfig};

// Transport seam
pub use error::{HttpClientError, HttpClientResult};
pub use http::{HttpBackend, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
