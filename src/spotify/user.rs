use serde::Serialize;

use crate::{
    config,
    spotify::{SpotifyError, Upstream, http_client},
    utils::TimeRange,
};

/// Fetches the authenticated user's profile from `/me`.
pub async fn get_profile(token: &str) -> Result<Upstream, SpotifyError> {
    let client = http_client();
    let response = client
        .get(format!("{}/me", config::spotify_api_url()))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| SpotifyError::Network(e.to_string()))?;

    Upstream::read(response).await
}

/// Fetches the user's top tracks over the given time range.
pub async fn get_top_tracks(
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Upstream, SpotifyError> {
    send_get(
        format!("{}/me/top/tracks", config::spotify_api_url()),
        token,
        &[
            ("time_range", time_range.as_str().to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

/// Fetches the user's top artists over the given time range.
pub async fn get_top_artists(
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Upstream, SpotifyError> {
    send_get(
        format!("{}/me/top/artists", config::spotify_api_url()),
        token,
        &[
            ("time_range", time_range.as_str().to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

/// Fetches the user's listening history from `/me/player/recently-played`.
pub async fn get_recently_played(token: &str, limit: u32) -> Result<Upstream, SpotifyError> {
    send_get(
        format!("{}/me/player/recently-played", config::spotify_api_url()),
        token,
        &[("limit", limit.to_string())],
    )
    .await
}

/// Fetches recommendations for a prepared set of seed and attribute
/// parameters, as produced by the recommendation parameter builder.
pub async fn get_recommendations(
    token: &str,
    params: &[(String, String)],
) -> Result<Upstream, SpotifyError> {
    send_get(
        format!("{}/recommendations", config::spotify_api_url()),
        token,
        params,
    )
    .await
}

async fn send_get<Q>(url: String, token: &str, query: &Q) -> Result<Upstream, SpotifyError>
where
    Q: Serialize + ?Sized,
{
    let client = http_client();
    let response = client
        .get(url)
        .bearer_auth(token)
        .query(query)
        .send()
        .await
        .map_err(|e| SpotifyError::Network(e.to_string()))?;

    Upstream::read(response).await
}
