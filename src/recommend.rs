//! Recommendation parameter building.
//!
//! Translates a persona plus coarse listener preferences into the query
//! parameters of a Spotify recommendations request. The mapping is a pure
//! function over fixed tables: persona genres and tunable attributes come
//! first-hand from the characters' musical profiles, preference genres from
//! the taste quiz categories. Spotify accepts at most five seeds per
//! request, so seeds are capped at two tracks, two artists and one genre.

use std::collections::HashSet;

use crate::types::RecommendationRequest;

/// Tunable attributes applied when no known persona is selected.
pub const DEFAULT_ATTRIBUTES: &[(&str, &str)] =
    &[("target_energy", "0.7"), ("target_valence", "0.5")];

/// Personas with a dedicated tuning profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Kaiser,
    Jaekyung,
}

impl Persona {
    pub fn parse(id: &str) -> Option<Persona> {
        match id.trim().to_lowercase().as_str() {
            "kaiser" => Some(Persona::Kaiser),
            "jaekyung" => Some(Persona::Jaekyung),
            _ => None,
        }
    }

    pub fn genres(&self) -> &'static [&'static str] {
        match self {
            Persona::Kaiser => &["hip-hop", "rap", "dark-pop"],
            Persona::Jaekyung => &["hip-hop", "metal", "industrial"],
        }
    }

    pub fn attributes(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Persona::Kaiser => &[
                ("target_energy", "0.8"),
                ("target_valence", "0.4"),
                ("min_tempo", "100"),
                ("target_danceability", "0.6"),
            ],
            Persona::Jaekyung => &[
                ("target_energy", "0.9"),
                ("target_valence", "0.3"),
                ("min_tempo", "120"),
                ("target_danceability", "0.5"),
            ],
        }
    }
}

/// Coarse genre buckets offered by the taste quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenrePreference {
    HipHop,
    Electronic,
    Rock,
    Rnb,
    Pop,
}

impl GenrePreference {
    pub fn parse(value: &str) -> Option<GenrePreference> {
        match value.trim().to_lowercase().as_str() {
            "hiphop" => Some(GenrePreference::HipHop),
            "electronic" => Some(GenrePreference::Electronic),
            "rock" => Some(GenrePreference::Rock),
            "rnb" => Some(GenrePreference::Rnb),
            "pop" => Some(GenrePreference::Pop),
            _ => None,
        }
    }

    pub fn genres(&self) -> &'static [&'static str] {
        match self {
            GenrePreference::HipHop => &["hip-hop", "rap"],
            GenrePreference::Electronic => &["electronic", "edm"],
            GenrePreference::Rock => &["rock", "metal"],
            GenrePreference::Rnb => &["r-n-b", "soul"],
            GenrePreference::Pop => &["pop", "indie"],
        }
    }
}

/// Union of persona and preference genres, first appearance wins.
pub fn genre_seeds(request: &RecommendationRequest) -> Vec<&'static str> {
    let mut genres: Vec<&'static str> = Vec::new();

    if let Some(persona) = request.character_id.as_deref().and_then(Persona::parse) {
        genres.extend_from_slice(persona.genres());
    }

    if let Some(preference) = request
        .preferences
        .as_ref()
        .and_then(|p| p.genre.as_deref())
        .and_then(GenrePreference::parse)
    {
        genres.extend_from_slice(preference.genres());
    }

    let mut seen = HashSet::new();
    genres.retain(|genre| seen.insert(*genre));
    genres
}

/// Builds the ordered query parameters for a recommendations request.
///
/// Seed tracks and artists are truncated to the first two each and joined
/// with commas; only the first genre of the union is sent. Persona attribute
/// pairs follow verbatim, and the result size is pinned to 20.
pub fn build_recommendation_params(request: &RecommendationRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    if let Some(tracks) = request.seed_tracks.as_deref().filter(|t| !t.is_empty()) {
        let seeds = tracks
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push(("seed_tracks".to_string(), seeds));
    }

    if let Some(artists) = request.seed_artists.as_deref().filter(|a| !a.is_empty()) {
        let seeds = artists
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push(("seed_artists".to_string(), seeds));
    }

    if let Some(genre) = genre_seeds(request).first() {
        params.push(("seed_genres".to_string(), genre.to_string()));
    }

    let attributes = match request.character_id.as_deref().and_then(Persona::parse) {
        Some(persona) => persona.attributes(),
        None => DEFAULT_ATTRIBUTES,
    };
    for (key, value) in attributes {
        params.push((key.to_string(), value.to_string()));
    }

    params.push(("limit".to_string(), "20".to_string()));
    params
}
