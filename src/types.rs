use std::{collections::HashMap, sync::Arc, time::Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

impl TokenSet {
    /// Builds a token set stamped at the moment of issue. `expires_at` is
    /// always derived from the current clock so freshness checks stay
    /// consistent no matter which flow produced the token.
    pub fn issued(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        TokenSet {
            access_token,
            refresh_token,
            expires_at: Utc::now().timestamp() + expires_in,
        }
    }

    pub fn seconds_until_expiry(&self) -> i64 {
        self.expires_at - Utc::now().timestamp()
    }
}

/// Shared state carried by the relay's handlers. `pending` holds the state
/// nonces issued by the login endpoint until their callback consumes them.
/// `capture` is only present when the server was spawned by the `login`
/// command and receives the token response for the waiting CLI.
#[derive(Clone)]
pub struct AppState {
    pub client_url: String,
    pub pending: Arc<Mutex<HashMap<String, Instant>>>,
    pub capture: Option<Arc<Mutex<Option<TokenResponse>>>>,
}

impl AppState {
    pub fn new(client_url: String) -> Self {
        AppState {
            client_url,
            pending: Arc::new(Mutex::new(HashMap::new())),
            capture: None,
        }
    }

    pub fn with_capture(client_url: String) -> Self {
        AppState {
            client_url,
            pending: Arc::new(Mutex::new(HashMap::new())),
            capture: Some(Arc::new(Mutex::new(None))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationRequest {
    pub character_id: Option<String>,
    pub preferences: Option<Preferences>,
    pub seed_tracks: Option<Vec<String>>,
    pub seed_artists: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub genre: Option<String>,
    pub language: Option<String>,
    pub era: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: Option<AlbumSummary>,
    pub duration_ms: Option<u64>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub genres: Option<Vec<String>>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<ArtistSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub track: Track,
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct RecentTableRow {
    pub played_at: String,
    pub track: String,
    pub artists: String,
}

#[derive(Tabled)]
pub struct CharacterTableRow {
    pub id: String,
    pub name: String,
    pub series: String,
    pub vibe: String,
}
