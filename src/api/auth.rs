use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use axum::{
    Extension, Json,
    body::Bytes,
    extract::Query,
    http::StatusCode,
    response::Redirect,
};
use serde_json::{Value, json};

use crate::{
    config, spotify,
    types::{AppState, TokenResponse},
    utils, warning,
};

/// Pending state nonces older than this are dropped unconsumed.
pub const PENDING_STATE_TTL: Duration = Duration::from_secs(600);

/// Issues a state nonce and the matching authorization URL.
///
/// The nonce is recorded in the pending table before the URL leaves the
/// relay, so the callback can tell its own round trips from forged ones.
/// Shared between the login endpoint and the CLI login command.
pub async fn issue_login(state: &AppState) -> (String, String) {
    let nonce = utils::generate_state();

    let mut pending = state.pending.lock().await;
    prune_pending(&mut pending);
    pending.insert(nonce.clone(), Instant::now());
    drop(pending);

    let url = spotify::auth::authorize_url(
        &config::spotify_auth_url(),
        &config::spotify_client_id(),
        &config::spotify_redirect_uri(),
        &config::spotify_scope(),
        &nonce,
    );

    (url, nonce)
}

pub async fn login(Extension(state): Extension<AppState>) -> Json<Value> {
    let (url, nonce) = issue_login(&state).await;
    Json(json!({ "url": url, "state": nonce }))
}

/// Completes the authorization round trip.
///
/// Order of checks: an upstream `error` is passed back first, then the
/// state nonce must match one this relay issued (consumed on use), then a
/// `code` must be present. The exchange itself makes one outbound call;
/// on success the browser is redirected to the client with the tokens in
/// the URL fragment, never in a query string or body.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Redirect {
    let client_url = &state.client_url;

    if let Some(error) = params.get("error") {
        return Redirect::to(&callback_error_url(client_url, error));
    }

    let state_ok = match params.get("state") {
        Some(nonce) => consume_state(&state, nonce).await,
        None => false,
    };
    if !state_ok {
        return Redirect::to(&callback_error_url(client_url, "state_mismatch"));
    }

    let Some(code) = params.get("code") else {
        return Redirect::to(&callback_error_url(client_url, "missing_code"));
    };

    match spotify::auth::exchange_code(code).await {
        Ok(upstream) if upstream.is_success() => {
            match serde_json::from_str::<TokenResponse>(&upstream.body) {
                Ok(token) => {
                    if let Some(capture) = &state.capture {
                        *capture.lock().await = Some(token.clone());
                    }
                    Redirect::to(&callback_success_url(client_url, &token))
                }
                Err(e) => {
                    warning!("Token exchange returned an unreadable body: {}", e);
                    Redirect::to(&callback_error_url(client_url, "server_error"))
                }
            }
        }
        Ok(upstream) => {
            warning!("Token exchange failed: {}", upstream.status);
            Redirect::to(&callback_error_url(client_url, "token_exchange_failed"))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Redirect::to(&callback_error_url(client_url, "server_error"))
        }
    }
}

/// Exchanges a refresh token for a fresh access token.
///
/// A missing or empty `refresh_token` is rejected with 400 before any
/// outbound call. An upstream rejection maps to 401 and is never retried;
/// on success the token endpoint's JSON body is passed through verbatim.
pub async fn refresh(body: Bytes) -> (StatusCode, Json<Value>) {
    let parsed: Option<Value> = serde_json::from_slice(&body).ok();
    let refresh_token = parsed
        .as_ref()
        .and_then(|v| v.get("refresh_token"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());

    let Some(refresh_token) = refresh_token else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Refresh token required" })),
        );
    };

    match spotify::auth::refresh_access_token(refresh_token).await {
        Ok(upstream) if upstream.is_success() => {
            match serde_json::from_str::<Value>(&upstream.body) {
                Ok(tokens) => (StatusCode::OK, Json(tokens)),
                Err(e) => {
                    warning!("Token refresh returned an unreadable body: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Server error" })),
                    )
                }
            }
        }
        Ok(upstream) => {
            warning!("Token refresh rejected: {}", upstream.status);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Token refresh failed" })),
            )
        }
        Err(e) => {
            warning!("Token refresh failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server error" })),
            )
        }
    }
}

/// Redirect target for a completed login. Tokens ride in the fragment so
/// they never reach server logs.
pub fn callback_success_url(client_url: &str, token: &TokenResponse) -> String {
    format!(
        "{}/callback#access_token={}&refresh_token={}&expires_in={}",
        client_url,
        urlencoding::encode(&token.access_token),
        urlencoding::encode(token.refresh_token.as_deref().unwrap_or_default()),
        token.expires_in,
    )
}

/// Redirect target for a failed login.
pub fn callback_error_url(client_url: &str, code: &str) -> String {
    format!("{}?error={}", client_url, urlencoding::encode(code))
}

async fn consume_state(state: &AppState, nonce: &str) -> bool {
    let mut pending = state.pending.lock().await;
    prune_pending(&mut pending);
    pending.remove(nonce).is_some()
}

fn prune_pending(pending: &mut HashMap<String, Instant>) {
    pending.retain(|_, issued| issued.elapsed() < PENDING_STATE_TTL);
}
