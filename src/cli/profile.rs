use crate::{error, info, management::SessionManager};

/// Prints the authenticated user's Spotify profile.
pub async fn profile() {
    let mut manager = SessionManager::load().await;

    let profile = match manager.ensure_profile().await {
        Ok(profile) => profile,
        Err(e) => error!("Failed to fetch profile: {}", e),
    };

    info!(
        "Display name: {}",
        profile.display_name.as_deref().unwrap_or("-")
    );
    info!("User ID: {}", profile.id);

    if let Some(email) = &profile.email {
        info!("Email: {}", email);
    }
    if let Some(country) = &profile.country {
        info!("Country: {}", country);
    }
    if let Some(product) = &profile.product {
        info!("Subscription: {}", product);
    }
    if let Some(followers) = &profile.followers {
        info!("Followers: {}", followers.total);
    }
}
