use chrono::Utc;
use vibematch::management::{EXPIRY_BUFFER_SECS, SessionManager, TokenState, classify};
use vibematch::types::TokenSet;

// Helper function to create a token set with a given remaining lifetime
fn token_with_lifetime(remaining_secs: i64) -> TokenSet {
    TokenSet {
        access_token: "access_123".to_string(),
        refresh_token: "refresh_456".to_string(),
        expires_at: Utc::now().timestamp() + remaining_secs,
    }
}

#[test]
fn test_token_set_issued() {
    let before = Utc::now().timestamp();
    let set = TokenSet::issued("acc".to_string(), "ref".to_string(), 3600);
    let after = Utc::now().timestamp();

    // expires_at is stamped from the current clock plus the lifetime
    assert!(set.expires_at >= before + 3600);
    assert!(set.expires_at <= after + 3600);

    // A one-hour token reports roughly an hour until expiry
    let remaining = set.seconds_until_expiry();
    assert!(remaining > 3590 && remaining <= 3600);
}

#[test]
fn test_seconds_until_expiry_negative_when_expired() {
    let set = token_with_lifetime(-120);
    assert!(set.seconds_until_expiry() <= -119);
}

#[test]
fn test_classify() {
    // Plenty of lifetime left
    assert_eq!(classify(&token_with_lifetime(3600)), TokenState::Valid);

    // Just above the buffer still counts as valid
    assert_eq!(
        classify(&token_with_lifetime(EXPIRY_BUFFER_SECS + 60)),
        TokenState::Valid
    );

    // Four minutes left sits inside the five-minute buffer
    assert_eq!(classify(&token_with_lifetime(240)), TokenState::Expiring);

    // Already expired is still just expiring; only a failed refresh
    // invalidates a session
    assert_eq!(classify(&token_with_lifetime(-10)), TokenState::Expiring);
}

#[test]
fn test_token_state_display() {
    assert_eq!(TokenState::Absent.to_string(), "absent");
    assert_eq!(TokenState::Valid.to_string(), "valid");
    assert_eq!(TokenState::Expiring.to_string(), "expiring");
    assert_eq!(TokenState::Refreshing.to_string(), "refreshing");
    assert_eq!(TokenState::Invalid.to_string(), "invalid");
}

#[test]
fn test_new_manager_is_absent() {
    let manager = SessionManager::new();

    assert_eq!(manager.state(), TokenState::Absent);
    assert!(manager.token().is_none());
    assert!(manager.profile().is_none());
    assert!(!manager.is_authenticated());
}

#[test]
fn test_adopt_classifies_and_drops_profile() {
    let mut manager = SessionManager::new();

    manager.adopt(token_with_lifetime(3600));
    assert_eq!(manager.state(), TokenState::Valid);
    assert!(manager.token().is_some());

    // The profile cache belongs to the previous acquisition
    assert!(manager.profile().is_none());

    // Adopting a nearly expired set lands in the buffer zone
    manager.adopt(token_with_lifetime(240));
    assert_eq!(manager.state(), TokenState::Expiring);
}

#[test]
fn test_is_authenticated_requires_profile() {
    let mut manager = SessionManager::new();

    // A live token alone is not enough
    manager.adopt(token_with_lifetime(3600));
    assert!(!manager.is_authenticated());

    // An expired token is never authenticated
    manager.adopt(token_with_lifetime(-10));
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn test_ensure_fresh_without_session() {
    let mut manager = SessionManager::new();

    let result = manager.ensure_fresh().await;
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Not authenticated"));
}

#[tokio::test]
async fn test_ensure_fresh_returns_live_token_without_refresh() {
    let mut manager = SessionManager::new();
    manager.adopt(token_with_lifetime(3600));

    // Fresh tokens are returned as-is without touching the network
    let token = manager.ensure_fresh().await.unwrap();
    assert_eq!(token, "access_123");
    assert_eq!(manager.state(), TokenState::Valid);

    // Asking again changes nothing
    let token = manager.ensure_fresh().await.unwrap();
    assert_eq!(token, "access_123");
    assert_eq!(manager.state(), TokenState::Valid);
}
