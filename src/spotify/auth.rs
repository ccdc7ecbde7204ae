use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    config,
    spotify::{SpotifyError, Upstream, http_client},
};

/// Assembles the Spotify authorization URL for the code flow.
///
/// The state nonce binds the browser round trip to a login request issued
/// by this relay; the callback refuses codes arriving with a state it never
/// handed out.
///
/// # Arguments
///
/// * `auth_url` - Base URL of the authorization endpoint
/// * `client_id` - Registered application client ID
/// * `redirect_uri` - Callback URI registered with Spotify
/// * `scope` - Space-separated OAuth scopes
/// * `state` - Nonce to carry through the round trip
///
/// # Example
///
/// ```
/// let url = authorize_url(
///     "https://accounts.spotify.com/authorize",
///     "abc123",
///     "http://localhost:3001/api/auth/callback",
///     "user-top-read",
///     "nonce",
/// );
/// ```
pub fn authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    state: &str,
) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = auth_url,
        client_id = urlencoding::encode(client_id),
        redirect_uri = urlencoding::encode(redirect_uri),
        scope = urlencoding::encode(scope),
        state = urlencoding::encode(state),
    )
}

/// Exchanges an authorization code for an access token.
///
/// Posts the code to the token endpoint with the client id and secret as
/// Basic credentials. Exactly one outbound call is made; an upstream
/// rejection comes back as a non-success [`Upstream`] for the caller to
/// translate, never retried here.
///
/// # Arguments
///
/// * `code` - Authorization code received on the callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Upstream)` - Upstream status and raw token-endpoint body
/// - `Err(SpotifyError)` - Transport failure or unreadable response
pub async fn exchange_code(code: &str) -> Result<Upstream, SpotifyError> {
    let redirect_uri = config::spotify_redirect_uri();

    let client = http_client();
    let response = client
        .post(config::spotify_token_url())
        .header("Authorization", basic_credentials())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| SpotifyError::Network(e.to_string()))?;

    Upstream::read(response).await
}

/// Refreshes an access token using a refresh token.
///
/// Runs the refresh-token grant against the token endpoint with Basic
/// client credentials. Both the `/api/auth/refresh` handler and the session
/// manager funnel through this routine, so refresh semantics stay in one
/// place. One outbound call, no retries.
///
/// # Arguments
///
/// * `refresh_token` - Refresh token from a previous authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Upstream)` - Upstream status and raw token-endpoint body; the body
///   may omit `refresh_token`, in which case callers keep their previous one
/// - `Err(SpotifyError)` - Transport failure or unreadable response
pub async fn refresh_access_token(refresh_token: &str) -> Result<Upstream, SpotifyError> {
    let client = http_client();
    let response = client
        .post(config::spotify_token_url())
        .header("Authorization", basic_credentials())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| SpotifyError::Network(e.to_string()))?;

    Upstream::read(response).await
}

fn basic_credentials() -> String {
    let raw = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(raw))
}
