use std::time::{Duration, Instant};

use crate::{
    api, config, error, info,
    management::{EXPIRY_BUFFER_SECS, SessionManager},
    server, success,
    types::{AppState, TokenResponse},
    warning,
};

/// Runs the interactive Spotify login flow.
///
/// Spawns the relay in-process so its own callback endpoint can receive
/// the authorization redirect, opens the consent page in a browser, then
/// polls the capture slot until the tokens arrive or the wait times out.
/// On success the tokens and the user profile are persisted to the local
/// session cache.
pub async fn login() {
    let state = AppState::with_capture(config::client_url());

    let relay = state.clone();
    tokio::spawn(async move {
        server::start(relay).await;
    });

    let (auth_url, _nonce) = api::auth::issue_login(&state).await;

    info!("Opening Spotify authorization page...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Could not open a browser. Please visit this URL manually:\n{}",
            auth_url
        );
    }

    match wait_for_token(&state).await {
        Some(response) => {
            let mut manager = SessionManager::load().await;
            if let Err(e) = manager.capture(response).await {
                error!("Login failed: {}", e);
            }

            let name = manager
                .profile()
                .and_then(|p| p.display_name.clone())
                .unwrap_or_else(|| "you".to_string());
            success!("Authentication successful. Welcome, {}!", name);
        }
        None => {
            error!("Authentication timed out. Please try again.");
        }
    }
}

/// Clears the persisted session, tokens and profile alike.
pub async fn logout() {
    let mut manager = SessionManager::load().await;
    manager.logout().await;
    success!("Logged out. Session cleared.");
}

/// Reports the stored session state without touching the network.
pub async fn status() {
    let manager = SessionManager::load().await;

    let Some(token) = manager.token() else {
        info!("No session. Run `vibematch login` to authenticate.");
        return;
    };

    info!("Session state: {}", manager.state());

    let remaining = token.seconds_until_expiry();
    if remaining > 0 {
        info!("Access token expires in {}s.", remaining);
        if remaining <= EXPIRY_BUFFER_SECS {
            info!("The next request will refresh it first.");
        }
    } else {
        warning!("Access token expired {}s ago.", -remaining);
    }

    match manager.profile() {
        Some(profile) => info!(
            "Signed in as {}.",
            profile.display_name.as_deref().unwrap_or(&profile.id)
        ),
        None => info!("No profile cached yet."),
    }
}

async fn wait_for_token(state: &AppState) -> Option<TokenResponse> {
    let capture = state.capture.as_ref()?;

    let max_wait = Duration::from_secs(60);
    let poll_interval = Duration::from_secs(1);
    let started = Instant::now();

    while started.elapsed() < max_wait {
        {
            let slot = capture.lock().await;
            if let Some(response) = slot.as_ref() {
                return Some(response.clone());
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    None
}
