use chrono::DateTime;
use tabled::Table;

use crate::{
    error,
    management::SessionManager,
    spotify,
    types::{RecentTableRow, RecentlyPlayedResponse},
};

/// Prints the user's recently played tracks, newest first.
pub async fn recent(limit: u32) {
    let mut manager = SessionManager::load().await;
    let token = match manager.ensure_fresh().await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = super::spinner("Fetching recently played...");
    let outcome = spotify::user::get_recently_played(&token, limit.clamp(1, 50)).await;
    pb.finish_and_clear();

    let upstream = match outcome {
        Ok(upstream) => upstream,
        Err(e) => error!("Failed to fetch recently played: {}", e),
    };
    if !upstream.is_success() {
        error!("Spotify rejected the request: {}", upstream.status);
    }

    let parsed: RecentlyPlayedResponse = match serde_json::from_str(&upstream.body) {
        Ok(parsed) => parsed,
        Err(e) => error!("Unexpected response from Spotify: {}", e),
    };

    let rows: Vec<RecentTableRow> = parsed
        .items
        .into_iter()
        .map(|item| RecentTableRow {
            played_at: format_played_at(&item.played_at),
            track: item.track.name.clone(),
            artists: item
                .track
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn format_played_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
