use tabled::Table;

use crate::{
    error,
    management::SessionManager,
    spotify,
    types::{ArtistTableRow, TopArtistsResponse, TopTracksResponse, Track, TrackTableRow},
    utils::TimeRange,
};

/// Prints the user's most played tracks for the given time range.
pub async fn top_tracks(time_range: TimeRange, limit: u32) {
    let mut manager = SessionManager::load().await;
    let token = match manager.ensure_fresh().await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = super::spinner("Fetching top tracks...");
    let outcome = spotify::user::get_top_tracks(&token, time_range, limit.clamp(1, 50)).await;
    pb.finish_and_clear();

    let upstream = match outcome {
        Ok(upstream) => upstream,
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    };
    if !upstream.is_success() {
        error!("Spotify rejected the request: {}", upstream.status);
    }

    let parsed: TopTracksResponse = match serde_json::from_str(&upstream.body) {
        Ok(parsed) => parsed,
        Err(e) => error!("Unexpected response from Spotify: {}", e),
    };

    let rows: Vec<TrackTableRow> = parsed.items.into_iter().map(track_row).collect();
    println!("{}", Table::new(rows));
}

/// Prints the user's most played artists for the given time range.
pub async fn top_artists(time_range: TimeRange, limit: u32) {
    let mut manager = SessionManager::load().await;
    let token = match manager.ensure_fresh().await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = super::spinner("Fetching top artists...");
    let outcome = spotify::user::get_top_artists(&token, time_range, limit.clamp(1, 50)).await;
    pb.finish_and_clear();

    let upstream = match outcome {
        Ok(upstream) => upstream,
        Err(e) => error!("Failed to fetch top artists: {}", e),
    };
    if !upstream.is_success() {
        error!("Spotify rejected the request: {}", upstream.status);
    }

    let parsed: TopArtistsResponse = match serde_json::from_str(&upstream.body) {
        Ok(parsed) => parsed,
        Err(e) => error!("Unexpected response from Spotify: {}", e),
    };

    let rows: Vec<ArtistTableRow> = parsed
        .items
        .into_iter()
        .map(|artist| ArtistTableRow {
            name: artist.name,
            genres: artist
                .genres
                .unwrap_or_default()
                .into_iter()
                .take(3)
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub(super) fn track_row(track: Track) -> TrackTableRow {
    TrackTableRow {
        name: track.name,
        artists: track
            .artists
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>()
            .join(", "),
        album: track.album.map(|a| a.name).unwrap_or_default(),
    }
}
