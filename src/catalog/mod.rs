//! # Catalog Integration Module
//!
//! This module provides the HTTP interface to the music catalog API used by
//! the analytics pipeline. It covers the four call shapes the pipeline
//! consumes (playlist tracks, artist genres, bulk audio features, and
//! recommendations) and the rate-limit handling they all share.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! implements one catalog endpoint on top of the shared [`CatalogClient`]:
//!
//! ```text
//! Analytics Layer (batch fetcher, genre aggregator, seed builder)
//!          ↓
//! Catalog Integration Layer
//!     ├── Retry (rate-limit aware executor)
//!     ├── Playlists (paginated track listing)
//!     ├── Artists (genre lookup)
//!     ├── Features (bulk audio features)
//!     └── Recommendations (seeded queries)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Music Catalog API
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Every endpoint decodes responses through one shared path so the whole
//! crate sees a single error taxonomy ([`CatalogError`]):
//!
//! - **Rate limiting**: a 429 response becomes [`CatalogError::RateLimited`]
//!   carrying the server's `Retry-After` hint. This is the only error class
//!   the retry executor ([`retry::execute_with_retry`]) retries.
//! - **Missing resources**: a 404 becomes [`CatalogError::NotFound`] so
//!   callers can distinguish a bad playlist id from an outage.
//! - **Upstream failures**: network errors, non-success statuses, and
//!   malformed bodies become [`CatalogError::Upstream`] and are surfaced
//!   immediately, never retried.
//! - **Internal failures**: worker tasks that cannot be joined and replies
//!   that violate the API contract become [`CatalogError::Internal`]; these
//!   are terminal.
//!
//! ## Authentication
//!
//! Requests carry a bearer token taken from configuration
//! ([`crate::config::catalog_token`]). Token acquisition and refresh are a
//! deployment concern, not handled here.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config;

pub mod artists;
pub mod features;
pub mod playlists;
pub mod recommendations;
pub mod retry;

/// Errors raised by catalog API calls.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog asked us to back off; `retry_after` is the server's wait
    /// hint in seconds, when it sent one.
    RateLimited { retry_after: Option<u64> },
    /// The requested resource does not exist.
    NotFound(String),
    /// Transport, status, or decode failure from the catalog.
    Upstream(reqwest::Error),
    /// Terminal failure inside this backend (a worker died, or the catalog
    /// reply violated its contract).
    Internal(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::RateLimited {
                retry_after: Some(secs),
            } => {
                write!(f, "catalog rate limit exceeded, retry after {}s", secs)
            }
            CatalogError::RateLimited { retry_after: None } => {
                write!(f, "catalog rate limit exceeded")
            }
            CatalogError::NotFound(what) => write!(f, "catalog resource not found: {}", what),
            CatalogError::Upstream(err) => write!(f, "catalog request failed: {}", err),
            CatalogError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Upstream(err)
    }
}

/// HTTP client for the music catalog API.
///
/// Holds the connection pool, the API base URL, and the bearer token.
/// Cloning is cheap (the underlying `reqwest::Client` is reference counted),
/// which is what lets the analytics layer hand copies to worker tasks.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    api_url: String,
    token: String,
}

impl CatalogClient {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            token,
        }
    }

    /// Builds a client from `CATALOG_API_URL` and `CATALOG_API_TOKEN`.
    ///
    /// # Panics
    ///
    /// Panics if either environment variable is not set; call
    /// [`crate::config::load_env`] first.
    pub fn from_env() -> Self {
        Self::new(config::catalog_apiurl(), config::catalog_token())
    }

    pub(crate) fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

/// Decodes a catalog response into `T`, mapping 429 and 404 statuses to
/// their dedicated error variants first.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, CatalogError> {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());
        return Err(CatalogError::RateLimited { retry_after });
    }

    if response.status() == StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound(response.url().path().to_string()));
    }

    let response = response.error_for_status()?;
    Ok(response.json::<T>().await?)
}
