//! Configuration management for the vibematch relay.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials,
//! server settings, and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, falling back to one in the
//!    working directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `vibematch/.env`. When no file exists there,
/// a `.env` in the working directory is tried instead; absence of both is
/// fine, since the credentials may already live in the environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/vibematch/.env`
/// - macOS: `~/Library/Application Support/vibematch/.env`
/// - Windows: `%LOCALAPPDATA%/vibematch/.env`
///
/// # Returns
///
/// Returns `Ok(())` if environment loading completed, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use vibematch::config;
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
    path.push("vibematch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with Spotify's
/// developer platform. Together with the client ID it forms the Basic
/// credentials sent to the token endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered with Spotify.
///
/// Reads `SPOTIFY_REDIRECT_URI`, defaulting to the relay's own callback
/// endpoint on the default port. The value must match the redirect URI
/// registered in the Spotify application settings.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // "http://localhost:3001/api/auth/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI")
        .unwrap_or_else(|_| "http://localhost:3001/api/auth/callback".to_string())
}

/// Returns the origin of the browser client the relay serves.
///
/// Reads `CLIENT_URL`, defaulting to the demo front-end's dev server. The
/// callback handler redirects here and the CORS layer allows this origin.
///
/// # Example
///
/// ```
/// let client = client_url(); // "http://localhost:8080"
/// ```
pub fn client_url() -> String {
    env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Returns the TCP port the relay listens on.
///
/// Reads `PORT`, defaulting to 3001. Non-numeric values fall back to the
/// default rather than aborting startup.
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001)
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_AUTH_URL` which contains the base URL for Spotify's OAuth
/// authorization endpoint, defaulting to the public accounts service. This
/// is where users are redirected to grant permissions to the application.
///
/// # Example
///
/// ```
/// let auth_url = spotify_auth_url(); // "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_TOKEN_URL` which contains the URL for exchanging
/// authorization codes for access tokens and for refreshing them,
/// defaulting to the public accounts service.
///
/// # Example
///
/// ```
/// let token_url = spotify_token_url(); // "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL` which contains the base URL for Spotify's Web
/// API endpoints, defaulting to the public v1 API. This is used for all
/// data operations after authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_api_url(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the OAuth scopes requested during login.
///
/// The demo reads top items, listening history, and the private profile.
pub fn spotify_scope() -> String {
    "user-top-read user-read-recently-played user-read-private".to_string()
}
