//! # API Module
//!
//! This module provides the HTTP endpoints served by `playlytics serve`. It
//! is a deliberately thin layer: all analytics behavior lives in
//! [`crate::analytics`], and the handlers here only translate between HTTP
//! and the pipeline's types.
//!
//! ## Endpoints
//!
//! ### Analytics
//!
//! - [`analyze`] - Runs the full analytics pipeline for one playlist and
//!   returns the combined result (genre counts, top genres, feature
//!   statistics, recommendations) as JSON.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information for monitoring systems and load
//!   balancers.
//!
//! ## Error Mapping
//!
//! Pipeline errors map onto HTTP statuses so callers can react without
//! parsing messages:
//!
//! - rate limit exhausted → `429 Too Many Requests` ("try again later")
//! - unknown playlist → `404 Not Found`
//! - catalog transport/decode failure → `502 Bad Gateway`
//! - internal worker failure → `500 Internal Server Error`
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework;
//! the shared [`crate::catalog::CatalogClient`] is injected through an
//! `Extension` layer by [`crate::server::router`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use playlytics::api::{analyze, health};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/analyze/{playlist_id}", get(analyze));
//! ```

mod analyze;
mod health;

pub use analyze::analyze;
pub use health::health;
