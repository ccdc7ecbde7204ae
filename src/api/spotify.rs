use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequestParts, Query},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{
    recommend,
    spotify::{self, SpotifyError, Upstream},
    types::RecommendationRequest,
    utils::{self, TimeRange},
    warning,
};

/// Bearer token extracted from the `Authorization` header. Requests
/// without one are rejected before any upstream call is made.
pub struct AccessToken(pub String);

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => Ok(AccessToken(token.to_string())),
            None => Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Access token required" })),
            )
                .into_response()),
        }
    }
}

pub async fn me(AccessToken(token): AccessToken) -> Response {
    relay(
        spotify::user::get_profile(&token).await,
        "Failed to fetch profile",
    )
}

pub async fn top_tracks(
    AccessToken(token): AccessToken,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let time_range = TimeRange::normalize(params.get("time_range").map(String::as_str));
    let limit = utils::clamp_limit(params.get("limit").map(String::as_str));

    relay(
        spotify::user::get_top_tracks(&token, time_range, limit).await,
        "Failed to fetch top tracks",
    )
}

pub async fn top_artists(
    AccessToken(token): AccessToken,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let time_range = TimeRange::normalize(params.get("time_range").map(String::as_str));
    let limit = utils::clamp_limit(params.get("limit").map(String::as_str));

    relay(
        spotify::user::get_top_artists(&token, time_range, limit).await,
        "Failed to fetch top artists",
    )
}

pub async fn recently_played(
    AccessToken(token): AccessToken,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let limit = utils::clamp_limit(params.get("limit").map(String::as_str));

    relay(
        spotify::user::get_recently_played(&token, limit).await,
        "Failed to fetch recently played",
    )
}

pub async fn recommendations(AccessToken(token): AccessToken, body: Bytes) -> Response {
    let request: RecommendationRequest = serde_json::from_slice(&body).unwrap_or_default();
    let params = recommend::build_recommendation_params(&request);

    relay(
        spotify::user::get_recommendations(&token, &params).await,
        "Failed to get recommendations",
    )
}

/// Uniform passthrough: upstream success forwards the JSON body, an
/// upstream rejection keeps its status code with a fixed error message,
/// and transport failures are logged and become 500.
fn relay(outcome: Result<Upstream, SpotifyError>, failure_message: &str) -> Response {
    match outcome {
        Ok(upstream) if upstream.is_success() => {
            match serde_json::from_str::<Value>(&upstream.body) {
                Ok(data) => (StatusCode::OK, Json(data)).into_response(),
                Err(e) => {
                    warning!("Spotify returned an unreadable body: {}", e);
                    server_error()
                }
            }
        }
        Ok(upstream) => {
            warning!("Spotify API error: {} {}", upstream.status, upstream.body);
            let status =
                StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "error": failure_message }))).into_response()
        }
        Err(e) => {
            warning!("Spotify request failed: {}", e);
            server_error()
        }
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error" })),
    )
        .into_response()
}
