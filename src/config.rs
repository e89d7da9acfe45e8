//! Configuration management for the Etsy shop listings proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files, plus the Etsy API v3 endpoints.
//! Credentials (client id, shop name, bootstrap tokens) come from the
//! environment; the API endpoints default to the production Etsy v3 surface
//! and can be overridden through the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Returns the base URL for the Etsy API v3 application endpoints (shops,
/// listings).
///
/// Reads the `ETSY_API_URL` environment variable, defaulting to the
/// production endpoint.
pub fn etsy_api_url() -> String {
    env::var("ETSY_API_URL")
        .unwrap_or_else(|_| "https://openapi.etsy.com/v3/application".to_string())
}

/// Returns the Etsy OAuth token endpoint, used for both the
/// authorization-code exchange and refresh-token grants.
///
/// Reads the `ETSY_TOKEN_URL` environment variable, defaulting to the
/// production endpoint.
pub fn etsy_token_url() -> String {
    env::var("ETSY_TOKEN_URL")
        .unwrap_or_else(|_| "https://api.etsy.com/v3/public/oauth/token".to_string())
}

/// Returns the Etsy OAuth authorize page where the user grants access.
///
/// Reads the `ETSY_CONNECT_URL` environment variable, defaulting to the
/// production page.
pub fn etsy_connect_url() -> String {
    env::var("ETSY_CONNECT_URL").unwrap_or_else(|_| "https://www.etsy.com/oauth/connect".to_string())
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `etsyproxy/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// The file is optional; when it is absent the process environment is used
/// as-is.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/etsyproxy/.env`
/// - macOS: `~/Library/Application Support/etsyproxy/.env`
/// - Windows: `%LOCALAPPDATA%/etsyproxy/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("etsyproxy/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Etsy application client id (the developer portal "keystring").
///
/// Sent as the `x-api-key` header on API calls and as the `client_id` on
/// OAuth grants.
///
/// # Panics
///
/// Panics if the `ETSY_CLIENT_ID` environment variable is not set.
pub fn etsy_client_id() -> String {
    env::var("ETSY_CLIENT_ID").expect("ETSY_CLIENT_ID must be set")
}

/// Returns the default shop name used when a request does not name one.
///
/// # Panics
///
/// Panics if the `ETSY_SHOP_NAME` environment variable is not set.
pub fn etsy_shop_name() -> String {
    env::var("ETSY_SHOP_NAME").expect("ETSY_SHOP_NAME must be set")
}

/// Returns the bootstrap access token, if configured.
///
/// Only consulted when no persisted token pair exists yet; after the first
/// refresh the persisted pair takes over.
pub fn etsy_access_token() -> Option<String> {
    env::var("ETSY_ACCESS_TOKEN").ok().filter(|t| !t.is_empty())
}

/// Returns the bootstrap refresh token, if configured.
pub fn etsy_refresh_token() -> Option<String> {
    env::var("ETSY_REFRESH_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
}

/// Returns the bind address for the local OAuth callback server.
///
/// Reads the `CALLBACK_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:9002`. The port matches the default redirect URI registered
/// with the Etsy application.
///
/// # Example
///
/// ```
/// let addr = callback_addr(); // e.g., "127.0.0.1:9002"
/// ```
pub fn callback_addr() -> String {
    env::var("CALLBACK_ADDRESS").unwrap_or_else(|_| "127.0.0.1:9002".to_string())
}
