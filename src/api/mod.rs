//! # API Module
//!
//! This module provides the HTTP endpoints served by the vibematch relay.
//! It implements the authentication gateway, the Spotify proxy, and a
//! health check.
//!
//! ## Overview
//!
//! The API module is the web interface the browser demo talks to. Tokens
//! live on the client; the relay's job is to keep the client secret out of
//! the browser and to forward data reads with a uniform error shape:
//!
//! - **Auth Gateway**: Issues authorization URLs with a one-time state
//!   nonce, completes the code-for-token exchange on the callback, and
//!   refreshes tokens on behalf of the client.
//! - **Spotify Proxy**: Forwards bearer-authenticated reads (profile, top
//!   items, listening history, recommendations) and passes upstream JSON
//!   and status through untouched.
//! - **Health Monitoring**: Reports liveness for deployment checks.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `GET /api/auth/login` returns the authorization URL and
//!   its state nonce
//! - [`callback`] - `GET /api/auth/callback` finishes the code exchange and
//!   redirects back to the client with tokens in the URL fragment
//! - [`refresh`] - `POST /api/auth/refresh` exchanges a refresh token for a
//!   fresh access token
//!
//! ### Proxy
//!
//! - [`me`], [`top_tracks`], [`top_artists`], [`recently_played`],
//!   [`recommendations`] - bearer-forwarded Spotify reads
//!
//! ### Monitoring
//!
//! - [`health`] - liveness status with a timestamp
//!
//! ## Error Shape
//!
//! Every failure a handler produces is `{"error": "..."}`. Upstream
//! rejections keep the upstream status code; transport failures map to 500
//! after being logged server-side.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use vibematch::api;
//!
//! let app = Router::new()
//!     .route("/api/auth/login", get(api::login))
//!     .route("/api/health", get(api::health));
//! ```

pub mod auth;
pub mod health;
pub mod spotify;

pub use auth::callback;
pub use auth::login;
pub use auth::refresh;
pub use health::health;
pub use spotify::me;
pub use spotify::recently_played;
pub use spotify::recommendations;
pub use spotify::top_artists;
pub use spotify::top_tracks;
