use std::{collections::HashMap, time::Instant};

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{FromRequestParts, Query},
    http::{Request, StatusCode, header},
    response::{IntoResponse, Redirect},
};
use serde_json::Value;
use vibematch::api::{
    self,
    auth::{callback_error_url, callback_success_url},
    spotify::AccessToken,
};
use vibematch::spotify::auth::authorize_url;
use vibematch::types::{AppState, TokenResponse};

// Helper function to create a token response as the token endpoint returns it
fn token_response(refresh_token: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: "AQDx 8/y+z".to_string(),
        refresh_token: refresh_token.map(str::to_string),
        expires_in: 3600,
        scope: None,
        token_type: Some("Bearer".to_string()),
    }
}

fn location(redirect: Redirect) -> String {
    let response = redirect.into_response();
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn extract_token(auth_header: Option<&str>) -> Result<String, StatusCode> {
    let mut builder = Request::builder().uri("/api/spotify/me");
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    match AccessToken::from_request_parts(&mut parts, &()).await {
        Ok(AccessToken(token)) => Ok(token),
        Err(response) => Err(response.status()),
    }
}

#[test]
fn test_authorize_url_assembly() {
    let url = authorize_url(
        "https://accounts.spotify.com/authorize",
        "client123",
        "http://localhost:3001/api/auth/callback",
        "user-top-read user-read-private",
        "nonceXYZ",
    );

    // Parameter order is fixed and every value except the base is encoded
    assert_eq!(
        url,
        "https://accounts.spotify.com/authorize\
         ?client_id=client123\
         &response_type=code\
         &redirect_uri=http%3A%2F%2Flocalhost%3A3001%2Fapi%2Fauth%2Fcallback\
         &scope=user-top-read%20user-read-private\
         &state=nonceXYZ"
    );
}

#[test]
fn test_callback_success_url_fragment() {
    let url = callback_success_url("http://localhost:8080", &token_response(Some("refresh-1")));

    // Tokens ride in the fragment, not the query string
    assert!(url.starts_with("http://localhost:8080/callback#access_token="));
    assert!(!url.contains('?'));

    // Token values are percent-encoded
    assert!(url.contains("access_token=AQDx%208%2Fy%2Bz"));
    assert!(url.contains("&refresh_token=refresh-1"));
    assert!(url.ends_with("&expires_in=3600"));
}

#[test]
fn test_callback_success_url_without_refresh_token() {
    let url = callback_success_url("http://localhost:8080", &token_response(None));
    assert!(url.contains("&refresh_token=&expires_in=3600"));
}

#[test]
fn test_callback_error_url() {
    // The error lands on the client origin itself, not a subpath
    assert_eq!(
        callback_error_url("http://localhost:8080", "access_denied"),
        "http://localhost:8080?error=access_denied"
    );

    // Unusual error codes are encoded
    assert_eq!(
        callback_error_url("http://localhost:8080", "state mismatch"),
        "http://localhost:8080?error=state%20mismatch"
    );
}

#[tokio::test]
async fn test_callback_passes_upstream_error_through() {
    let state = AppState::new("http://localhost:8080".to_string());

    let mut params = HashMap::new();
    params.insert("error".to_string(), "access_denied".to_string());

    let redirect = api::callback(Query(params), Extension(state)).await;
    assert_eq!(
        location(redirect),
        "http://localhost:8080?error=access_denied"
    );
}

#[tokio::test]
async fn test_callback_rejects_unknown_state() {
    let state = AppState::new("http://localhost:8080".to_string());

    // A code arriving with a state this relay never issued goes nowhere
    let mut params = HashMap::new();
    params.insert("state".to_string(), "forged".to_string());
    params.insert("code".to_string(), "abc".to_string());

    let redirect = api::callback(Query(params), Extension(state)).await;
    assert_eq!(
        location(redirect),
        "http://localhost:8080?error=state_mismatch"
    );
}

#[tokio::test]
async fn test_callback_state_consumed_once() {
    let state = AppState::new("http://localhost:8080".to_string());
    state
        .pending
        .lock()
        .await
        .insert("nonce1".to_string(), Instant::now());

    // A known state passes the check; without a code the flow stops there
    let mut params = HashMap::new();
    params.insert("state".to_string(), "nonce1".to_string());
    let redirect = api::callback(Query(params.clone()), Extension(state.clone())).await;
    assert_eq!(
        location(redirect),
        "http://localhost:8080?error=missing_code"
    );

    // The same state a second time has already been consumed
    let redirect = api::callback(Query(params), Extension(state)).await;
    assert_eq!(
        location(redirect),
        "http://localhost:8080?error=state_mismatch"
    );
}

#[tokio::test]
async fn test_refresh_rejects_missing_token() {
    // Empty JSON object
    let (status, Json(body)) = api::refresh(Bytes::from_static(b"{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("Refresh token required")
    );

    // Present but empty
    let (status, _) = api::refresh(Bytes::from_static(b"{\"refresh_token\":\"\"}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Not JSON at all
    let (status, _) = api::refresh(Bytes::from_static(b"not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Empty body
    let (status, _) = api::refresh(Bytes::new()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_ok() {
    let Json(body) = api::health().await;

    assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));

    // Timestamp is well-formed RFC 3339
    let timestamp = body.get("timestamp").and_then(Value::as_str).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_access_token_extraction() {
    let token = extract_token(Some("Bearer tok123")).await.unwrap();
    assert_eq!(token, "tok123");
}

#[tokio::test]
async fn test_access_token_rejections() {
    // No Authorization header
    assert_eq!(extract_token(None).await, Err(StatusCode::UNAUTHORIZED));

    // Wrong scheme
    assert_eq!(
        extract_token(Some("Basic dXNlcjpwYXNz")).await,
        Err(StatusCode::UNAUTHORIZED)
    );

    // Bearer prefix with nothing behind it
    assert_eq!(
        extract_token(Some("Bearer ")).await,
        Err(StatusCode::UNAUTHORIZED)
    );

    // Prefix match is exact, a lowercase scheme is rejected
    assert_eq!(
        extract_token(Some("bearer tok123")).await,
        Err(StatusCode::UNAUTHORIZED)
    );
}

#[tokio::test]
async fn test_access_token_rejection_body() {
    let mut builder = Request::builder().uri("/api/spotify/me");
    builder = builder.header(header::AUTHORIZATION, "token-without-scheme");
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    let response = AccessToken::from_request_parts(&mut parts, &())
        .await
        .err()
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("Access token required")
    );
}
