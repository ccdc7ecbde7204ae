//! # Spotify Integration Module
//!
//! This module is the single place where vibematch talks to Spotify. It
//! implements the OAuth 2.0 authorization-code operations of the accounts
//! service and the user-data reads of the Web API, and hands results back
//! in a form the relay can pass through untouched.
//!
//! ## Overview
//!
//! The relay never reinterprets Spotify payloads: handlers forward the
//! upstream JSON and status to the browser client, and the CLI deserializes
//! the same bodies into typed views for table output. To support both, data
//! calls return an [`Upstream`] pair of status code and raw body instead of
//! a decoded structure.
//!
//! ## Architecture
//!
//! ```text
//! Relay Handlers / CLI Commands / Session Manager
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize URL, code exchange, refresh)
//!     └── User Data (profile, top items, history, recommendations)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts Service / Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Confidential-client OAuth operations. The client id and
//! secret travel as a Basic authorization header to the token endpoint;
//! exchange and refresh each make exactly one outbound call and report the
//! upstream verdict without retrying.
//!
//! [`user`] - The five user-data reads the relay proxies: profile, top
//! tracks, top artists, recently played and recommendations. One forwarded
//! call per operation, bearer-authenticated with the caller's token.
//!
//! ## Error Handling
//!
//! Transport problems (connection failures, timeouts, unreadable bodies)
//! surface as [`SpotifyError`]. An HTTP rejection from Spotify is not an
//! error here: it comes back as an [`Upstream`] with the upstream status so
//! callers can decide between passthrough, retry-after-refresh, or session
//! teardown.
//!
//! All outbound requests carry a ten second deadline; a hung upstream
//! surfaces as a transport failure instead of stalling the relay.

use std::{fmt, time::Duration};

use reqwest::Client;

pub mod auth;
pub mod user;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure talking to Spotify, as opposed to Spotify rejecting a request.
#[derive(Debug)]
pub enum SpotifyError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Network(msg) => write!(f, "network error: {}", msg),
            SpotifyError::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for SpotifyError {}

/// Status and raw body of an upstream response, kept undecoded so the
/// relay can pass bodies through verbatim.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub status: u16,
    pub body: String,
}

impl Upstream {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Upstream, SpotifyError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SpotifyError::InvalidResponse(e.to_string()))?;
        Ok(Upstream { status, body })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}
