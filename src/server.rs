use std::net::SocketAddr;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{api, config, error, info, types::AppState};

pub fn router(state: AppState) -> Router {
    let origin = match state.client_url.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => error!("Invalid CLIENT_URL '{}': {}", state.client_url, e),
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/auth/login", get(api::login))
        .route("/api/auth/callback", get(api::callback))
        .route("/api/auth/refresh", post(api::refresh))
        .route("/api/spotify/me", get(api::me))
        .route("/api/spotify/top/tracks", get(api::top_tracks))
        .route("/api/spotify/top/artists", get(api::top_artists))
        .route("/api/spotify/recently-played", get(api::recently_played))
        .route("/api/spotify/recommendations", post(api::recommendations))
        .layer(Extension(state))
        .layer(cors)
}

pub async fn start(state: AppState) {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Relay listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
