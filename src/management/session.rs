use std::{fmt, path::PathBuf};

use crate::{
    spotify,
    types::{TokenResponse, TokenSet, UserProfile},
};

/// Tokens within this many seconds of expiry are refreshed before use.
pub const EXPIRY_BUFFER_SECS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    Absent,
    Valid,
    Expiring,
    Refreshing,
    Invalid,
}

impl TokenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenState::Absent => "absent",
            TokenState::Valid => "valid",
            TokenState::Expiring => "expiring",
            TokenState::Refreshing => "refreshing",
            TokenState::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn classify(set: &TokenSet) -> TokenState {
    if set.seconds_until_expiry() > EXPIRY_BUFFER_SECS {
        TokenState::Valid
    } else {
        TokenState::Expiring
    }
}

/// Owns the persisted token set and the in-memory profile. The `&mut`
/// receivers keep at most one refresh in flight.
pub struct SessionManager {
    token: Option<TokenSet>,
    profile: Option<UserProfile>,
    state: TokenState,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            token: None,
            profile: None,
            state: TokenState::Absent,
        }
    }

    pub async fn load() -> Self {
        let content = match async_fs::read_to_string(Self::session_path()).await {
            Ok(content) => content,
            Err(_) => return Self::new(),
        };

        match serde_json::from_str::<TokenSet>(&content) {
            Ok(set) => {
                let state = classify(&set);
                SessionManager {
                    token: Some(set),
                    profile: None,
                    state,
                }
            }
            Err(_) => Self::new(),
        }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(set) = &self.token else {
            return Ok(());
        };

        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(set).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub fn state(&self) -> TokenState {
        self.state
    }

    pub fn token(&self) -> Option<&TokenSet> {
        self.token.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// A session counts as authenticated only once a live token and a
    /// fetched profile are both present.
    pub fn is_authenticated(&self) -> bool {
        let live = self
            .token
            .as_ref()
            .map(|set| set.seconds_until_expiry() > 0)
            .unwrap_or(false);
        live && self.profile.is_some()
    }

    /// Installs a newly acquired token set. The cached profile belongs to
    /// the previous acquisition and is dropped.
    pub fn adopt(&mut self, set: TokenSet) {
        self.state = classify(&set);
        self.token = Some(set);
        self.profile = None;
    }

    /// Takes ownership of a token-endpoint response after login, persists
    /// it, and fetches the profile for the new acquisition.
    pub async fn capture(&mut self, response: TokenResponse) -> Result<(), String> {
        let TokenResponse {
            access_token,
            refresh_token,
            expires_in,
            ..
        } = response;

        let set = TokenSet::issued(access_token, refresh_token.unwrap_or_default(), expires_in);
        self.adopt(set);
        self.persist().await?;
        self.ensure_profile().await?;
        Ok(())
    }

    /// Returns an access token that is good for at least the expiry buffer,
    /// refreshing first when it is not. A fresh token never touches the
    /// network.
    pub async fn ensure_fresh(&mut self) -> Result<String, String> {
        match &self.token {
            None => Err("Not authenticated. Please run vibematch login.".to_string()),
            Some(set) if set.seconds_until_expiry() > EXPIRY_BUFFER_SECS => {
                self.state = TokenState::Valid;
                Ok(set.access_token.clone())
            }
            Some(_) => {
                self.state = TokenState::Expiring;
                self.refresh().await
            }
        }
    }

    /// Returns the profile for the current acquisition, fetching it at most
    /// once. A 401 on that fetch gets one refresh-and-retry before the
    /// session is given up on.
    pub async fn ensure_profile(&mut self) -> Result<UserProfile, String> {
        if let Some(profile) = &self.profile {
            return Ok(profile.clone());
        }

        let token = self.ensure_fresh().await?;
        let mut upstream = spotify::user::get_profile(&token)
            .await
            .map_err(|e| e.to_string())?;

        if upstream.status == 401 {
            let token = self.refresh().await?;
            upstream = spotify::user::get_profile(&token)
                .await
                .map_err(|e| e.to_string())?;
        }

        if !upstream.is_success() {
            return Err(format!(
                "Spotify rejected the profile request: {}",
                upstream.status
            ));
        }

        let profile: UserProfile =
            serde_json::from_str(&upstream.body).map_err(|e| e.to_string())?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Drops the persisted record and every cached field, from any state.
    pub async fn logout(&mut self) {
        self.clear_session().await;
    }

    async fn refresh(&mut self) -> Result<String, String> {
        let Some(current) = self.token.clone() else {
            return Err("Not authenticated. Please run vibematch login.".to_string());
        };

        self.state = TokenState::Refreshing;

        let renewed = match spotify::auth::refresh_access_token(&current.refresh_token).await {
            Ok(upstream) if upstream.is_success() => {
                serde_json::from_str::<TokenResponse>(&upstream.body).ok()
            }
            _ => None,
        };

        match renewed {
            Some(response) => {
                // Spotify may rotate the refresh token or leave it out.
                let refresh_token = response
                    .refresh_token
                    .unwrap_or_else(|| current.refresh_token.clone());
                let set = TokenSet::issued(response.access_token, refresh_token, response.expires_in);
                let access = set.access_token.clone();
                self.token = Some(set);
                self.state = TokenState::Valid;
                self.persist().await?;
                Ok(access)
            }
            None => {
                self.state = TokenState::Invalid;
                self.clear_session().await;
                Err("Session expired. Please run vibematch login.".to_string())
            }
        }
    }

    async fn clear_session(&mut self) {
        let _ = async_fs::remove_file(Self::session_path()).await;
        self.token = None;
        self.profile = None;
        self.state = TokenState::Absent;
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("vibematch/cache/session.json");
        path
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
