//! # CLI Module
//!
//! This module provides the command-line interface layer for vibematch. It
//! implements all user-facing commands and coordinates between the relay
//! server, the session manager, and the Spotify integration layer.
//!
//! ## Overview
//!
//! The CLI mirrors what the browser demo does through the relay, which
//! makes it a self-contained way to operate and inspect the system:
//!
//! - **Relay Operation**: Runs the HTTP relay the browser client talks to
//! - **Authentication Management**: Local OAuth login through the relay's
//!   own callback endpoint, session inspection, and logout
//! - **Listening Data**: Top tracks, top artists, and recently played
//!   history rendered as tables
//! - **Recommendations**: Persona-tuned recommendation queries built from
//!   the same parameter builder the relay uses
//! - **Persona Roster**: The characters available for tuning
//!
//! ## Command Categories
//!
//! ### Server
//!
//! - [`serve`] - Runs the relay (auth gateway + Spotify proxy) until
//!   interrupted
//!
//! ### Authentication
//!
//! - [`login`] - Spawns the relay in-process, opens the authorization page,
//!   and captures the resulting tokens into the local session
//! - [`logout`] - Clears the persisted session unconditionally
//! - [`status`] - Reports the stored session state without touching the
//!   network
//!
//! ### Listening Data
//!
//! - [`profile`] - The authenticated user's profile
//! - [`top_tracks`] / [`top_artists`] - Top items over a time range
//! - [`recent`] - Recently played tracks
//!
//! ### Recommendations
//!
//! - [`recommend`] - Persona plus taste preferences to a recommendation
//!   table
//! - [`characters`] - The static persona roster
//!
//! ## Architecture Design
//!
//! The CLI follows the same layering as the relay handlers:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session Lifecycle)
//!     ↓
//! Spotify Layer (API Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Data commands ask the session manager for a fresh token, make one
//! Spotify call, and render the result. The manager refreshes proactively,
//! so an expired session surfaces as a clear "please log in" message
//! instead of a failed request.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal Errors Terminate**: Unusable sessions and rejected requests
//!   exit with a red error line and a recovery hint
//! - **Recoverable Issues Warn**: A browser that will not open falls back
//!   to printing the URL
//! - **Progress Feedback**: Network calls run behind a spinner so slow
//!   upstream responses are visible
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! vibematch login                  # Authenticate with Spotify
//! vibematch profile                # Verify the session works
//! ```
//!
//! ### Regular Usage
//! ```bash
//! vibematch top tracks --time-range short_term
//! vibematch recent --limit 10
//! vibematch recommend --character kaiser --genre hiphop
//! ```
//!
//! ### Serving the Browser Demo
//! ```bash
//! vibematch serve                  # Relay on the configured port
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::server`] - Relay assembly and startup
//! - [`crate::management`] - Session lifecycle and token cache
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::recommend`] - Recommendation parameter builder
//! - [`crate::types`] - Data structures and table rows

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod auth;
mod characters;
mod profile;
mod recent;
mod recommend;
mod serve;
mod top;

pub use auth::login;
pub use auth::logout;
pub use auth::status;
pub use characters::characters;
pub use profile::profile;
pub use recent::recent;
pub use recommend::recommend;
pub use serve::serve;
pub use top::top_artists;
pub use top::top_tracks;

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
