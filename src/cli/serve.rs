use crate::{config, info, server, types::AppState};

/// Runs the relay server in the foreground until interrupted.
///
/// This is the process the browser demo talks to. It serves the auth
/// gateway and the Spotify proxy on the configured port and allows
/// cross-origin requests from the configured client URL.
pub async fn serve() {
    let state = AppState::new(config::client_url());

    info!("Allowing browser origin {}", state.client_url);
    server::start(state).await;
}
