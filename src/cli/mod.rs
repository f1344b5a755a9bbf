//! # CLI Module
//!
//! This module provides the command-line interface layer for playlytics. It
//! implements the user-facing commands and coordinates between the analytics
//! pipeline, the catalog client, and terminal output.
//!
//! ## Commands
//!
//! - [`analyze`] - Runs the analytics pipeline for one playlist and renders
//!   genre distribution, feature statistics, and recommendations as tables,
//!   or as JSON with `--json`
//! - `serve` - Starts the HTTP API (implemented in [`crate::server`], wired
//!   up by `main`)
//! - `completions` - Generates shell completions (wired up by `main`)
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Analytics Layer (Pipeline Orchestration)
//!     ↓
//! Catalog Layer (API Integration, Rate-Limit Retry)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Progress and User Experience
//!
//! Long-running operations show a spinner with status messages; results are
//! rendered with `tabled` and the outcome is reported through the crate's
//! colored logging macros. Fatal conditions (missing configuration,
//! exhausted rate-limit retries, upstream failures) terminate the process
//! with an actionable message.

mod analyze;

pub use analyze::analyze;
