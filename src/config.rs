//! Configuration management for the playlist analytics backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the catalog API endpoint and
//! credentials as well as the HTTP server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `playlytics/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playlytics/.env`
/// - macOS: `~/Library/Application Support/playlytics/.env`
/// - Windows: `%LOCALAPPDATA%/playlytics/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use playlytics::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlytics/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the HTTP API.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the analytics HTTP server should bind when
/// running `playlytics serve`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the music catalog API base URL.
///
/// Retrieves the `CATALOG_API_URL` environment variable which contains the
/// base URL for the catalog's REST endpoints (playlists, artists, audio
/// features, recommendations). The URL is expected without a trailing slash.
///
/// # Panics
///
/// Panics if the `CATALOG_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = catalog_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn catalog_apiurl() -> String {
    env::var("CATALOG_API_URL").expect("CATALOG_API_URL must be set")
}

/// Returns the bearer token used for catalog API requests.
///
/// Retrieves the `CATALOG_API_TOKEN` environment variable. Token acquisition
/// and refresh are outside this backend's responsibility; whatever process
/// deploys it is expected to provision a valid token.
///
/// # Panics
///
/// Panics if the `CATALOG_API_TOKEN` environment variable is not set.
///
/// # Security Note
///
/// The token should be kept confidential and never exposed in logs or
/// version control.
pub fn catalog_token() -> String {
    env::var("CATALOG_API_TOKEN").expect("CATALOG_API_TOKEN must be set")
}
