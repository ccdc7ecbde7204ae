use tabled::Table;

use crate::{
    error, info,
    management::SessionManager,
    recommend::{Persona, build_recommendation_params},
    spotify,
    types::{Preferences, RecommendationRequest, RecommendationsResponse, TrackTableRow},
    warning,
};

/// Fetches a persona-tuned recommendation mix and prints it as a table.
///
/// Builds the same request the browser demo sends, so the results match
/// what the web client would show for the given persona and preferences.
pub async fn recommend(
    character: Option<String>,
    genre: Option<String>,
    language: Option<String>,
    era: Option<String>,
    seed_tracks: Vec<String>,
    seed_artists: Vec<String>,
) {
    if let Some(id) = character.as_deref() {
        if Persona::parse(id).is_none() {
            warning!("No tuning profile for '{}', using default attributes.", id);
        }
    }

    let request = RecommendationRequest {
        character_id: character,
        preferences: Some(Preferences {
            genre,
            language,
            era,
        }),
        seed_tracks: (!seed_tracks.is_empty()).then_some(seed_tracks),
        seed_artists: (!seed_artists.is_empty()).then_some(seed_artists),
    };
    let params = build_recommendation_params(&request);

    let mut manager = SessionManager::load().await;
    let token = match manager.ensure_fresh().await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = super::spinner("Fetching recommendations...");
    let outcome = spotify::user::get_recommendations(&token, &params).await;
    pb.finish_and_clear();

    let upstream = match outcome {
        Ok(upstream) => upstream,
        Err(e) => error!("Failed to get recommendations: {}", e),
    };
    if !upstream.is_success() {
        error!("Spotify rejected the request: {}", upstream.status);
    }

    let parsed: RecommendationsResponse = match serde_json::from_str(&upstream.body) {
        Ok(parsed) => parsed,
        Err(e) => error!("Unexpected response from Spotify: {}", e),
    };

    if parsed.tracks.is_empty() {
        info!("No recommendations for this combination. Try different seeds.");
        return;
    }

    let rows: Vec<TrackTableRow> = parsed.tracks.into_iter().map(super::top::track_row).collect();
    println!("{}", Table::new(rows));
}
