mod session;

pub use session::EXPIRY_BUFFER_SECS;
pub use session::SessionManager;
pub use session::TokenState;
pub use session::classify;
