use vibematch::recommend::*;
use vibematch::types::{Preferences, RecommendationRequest};

// Helper function to create a request with just a persona
fn persona_request(character_id: &str) -> RecommendationRequest {
    RecommendationRequest {
        character_id: Some(character_id.to_string()),
        ..Default::default()
    }
}

// Helper function to create a request with a persona and a genre taste
fn persona_with_genre(character_id: &str, genre: &str) -> RecommendationRequest {
    RecommendationRequest {
        character_id: Some(character_id.to_string()),
        preferences: Some(Preferences {
            genre: Some(genre.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn value_of<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_persona_parse() {
    // Known personas resolve case-insensitively with surrounding whitespace
    assert_eq!(Persona::parse("kaiser"), Some(Persona::Kaiser));
    assert_eq!(Persona::parse("Jaekyung"), Some(Persona::Jaekyung));
    assert_eq!(Persona::parse("  KAISER  "), Some(Persona::Kaiser));

    // Roster members without a tuning profile resolve to nothing
    assert_eq!(Persona::parse("gojo"), None);
    assert_eq!(Persona::parse(""), None);
}

#[test]
fn test_persona_attributes() {
    let kaiser: Vec<(&str, &str)> = Persona::Kaiser.attributes().to_vec();
    assert_eq!(
        kaiser,
        vec![
            ("target_energy", "0.8"),
            ("target_valence", "0.4"),
            ("min_tempo", "100"),
            ("target_danceability", "0.6"),
        ]
    );

    let jaekyung: Vec<(&str, &str)> = Persona::Jaekyung.attributes().to_vec();
    assert_eq!(
        jaekyung,
        vec![
            ("target_energy", "0.9"),
            ("target_valence", "0.3"),
            ("min_tempo", "120"),
            ("target_danceability", "0.5"),
        ]
    );
}

#[test]
fn test_genre_preference_parse() {
    assert_eq!(GenrePreference::parse("hiphop"), Some(GenrePreference::HipHop));
    assert_eq!(GenrePreference::parse("RNB"), Some(GenrePreference::Rnb));
    assert_eq!(GenrePreference::parse("classical"), None);
}

#[test]
fn test_genre_seeds_union() {
    // Persona and preference genres merge, first appearance wins
    let request = persona_with_genre("kaiser", "hiphop");
    let seeds = genre_seeds(&request);
    assert_eq!(seeds, vec!["hip-hop", "rap", "dark-pop"]);

    // Disjoint preference genres are appended after the persona's
    let request = persona_with_genre("jaekyung", "electronic");
    let seeds = genre_seeds(&request);
    assert_eq!(
        seeds,
        vec!["hip-hop", "metal", "industrial", "electronic", "edm"]
    );
}

#[test]
fn test_genre_seeds_preference_only() {
    let request = RecommendationRequest {
        preferences: Some(Preferences {
            genre: Some("rnb".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(genre_seeds(&request), vec!["r-n-b", "soul"]);

    // No persona and no preference yields no genre seeds
    let empty = RecommendationRequest::default();
    assert!(genre_seeds(&empty).is_empty());
}

#[test]
fn test_build_params_empty_request() {
    let params = build_recommendation_params(&RecommendationRequest::default());

    // Only the default attributes and the fixed limit remain
    assert_eq!(
        params,
        vec![
            ("target_energy".to_string(), "0.7".to_string()),
            ("target_valence".to_string(), "0.5".to_string()),
            ("limit".to_string(), "20".to_string()),
        ]
    );
}

#[test]
fn test_build_params_unknown_persona_uses_defaults() {
    let params = build_recommendation_params(&persona_request("gojo"));

    assert_eq!(value_of(&params, "target_energy"), Some("0.7"));
    assert_eq!(value_of(&params, "target_valence"), Some("0.5"));

    // No tuning profile means no tempo or danceability targets
    assert_eq!(value_of(&params, "min_tempo"), None);
    assert_eq!(value_of(&params, "target_danceability"), None);
}

#[test]
fn test_build_params_persona_attributes_verbatim() {
    let params = build_recommendation_params(&persona_request("kaiser"));

    assert_eq!(value_of(&params, "target_energy"), Some("0.8"));
    assert_eq!(value_of(&params, "target_valence"), Some("0.4"));
    assert_eq!(value_of(&params, "min_tempo"), Some("100"));
    assert_eq!(value_of(&params, "target_danceability"), Some("0.6"));
    assert_eq!(value_of(&params, "seed_genres"), Some("hip-hop"));
}

#[test]
fn test_build_params_seed_truncation() {
    let request = RecommendationRequest {
        seed_tracks: Some(vec![
            "t1".to_string(),
            "t2".to_string(),
            "t3".to_string(),
        ]),
        seed_artists: Some(vec!["a1".to_string(), "a2".to_string(), "a3".to_string()]),
        ..Default::default()
    };
    let params = build_recommendation_params(&request);

    // Only the first two of each seed list survive, comma-joined
    assert_eq!(value_of(&params, "seed_tracks"), Some("t1,t2"));
    assert_eq!(value_of(&params, "seed_artists"), Some("a1,a2"));
}

#[test]
fn test_build_params_empty_seed_lists_omitted() {
    let request = RecommendationRequest {
        seed_tracks: Some(vec![]),
        seed_artists: Some(vec![]),
        ..Default::default()
    };
    let params = build_recommendation_params(&request);

    assert_eq!(value_of(&params, "seed_tracks"), None);
    assert_eq!(value_of(&params, "seed_artists"), None);
}

#[test]
fn test_build_params_single_genre_seed() {
    // The union has five entries but only the first is sent
    let request = persona_with_genre("jaekyung", "electronic");
    let params = build_recommendation_params(&request);

    assert_eq!(value_of(&params, "seed_genres"), Some("hip-hop"));
}

#[test]
fn test_build_params_order() {
    let request = RecommendationRequest {
        character_id: Some("kaiser".to_string()),
        preferences: Some(Preferences {
            genre: Some("hiphop".to_string()),
            ..Default::default()
        }),
        seed_tracks: Some(vec!["t1".to_string()]),
        seed_artists: Some(vec!["a1".to_string()]),
    };
    let params = build_recommendation_params(&request);

    let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "seed_tracks",
            "seed_artists",
            "seed_genres",
            "target_energy",
            "target_valence",
            "min_tempo",
            "target_danceability",
            "limit",
        ]
    );

    // The limit is always pinned last
    assert_eq!(params.last().map(|(k, v)| (k.as_str(), v.as_str())), Some(("limit", "20")));
}
