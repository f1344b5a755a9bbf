//! Playlist Analytics Backend Library
//!
//! This library analyzes playlists against a music catalog API: it fetches
//! per-track audio features in rate-limit-aware batches, aggregates genre
//! distributions across the playlist's artists, computes feature statistics,
//! and derives a seeded recommendation query from the result.
//!
//! # Modules
//!
//! - `analytics` - The analytics pipeline: batch fetching, genre aggregation,
//!   statistics, and recommendation seeding
//! - `api` - HTTP API endpoints served by `playlytics serve`
//! - `catalog` - Music catalog API client with rate-limit retry
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `server` - HTTP server bootstrap
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playlytics::{analytics, catalog::CatalogClient, config};
//!
//! #[tokio::main]
//! async fn main() -> playlytics::Res<()> {
//!     config::load_env().await?;
//!     let client = CatalogClient::from_env();
//!     let analysis = analytics::analyze_playlist(&client, "37i9dQZF1DXcBWIGoYBM5M").await?;
//!     println!("{} tracks analyzed", analysis.track_count);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use playlytics::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Fetching playlist tracks...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Playlist analyzed");
/// success!("Fetched features for {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("Track has no audio features, skipping");
/// warning!("Rate limited, waiting {} seconds", secs);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
