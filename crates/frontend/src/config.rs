//! Frontend configuration

/// Session configuration
pub struct SessionConfig;

impl SessionConfig {
    /// localStorage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// localStorage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";
}

/// UI configuration
pub struct UiConfig;

impl UiConfig {
    /// How long a toast stays on screen before dismissing itself
    pub const TOAST_DISMISS_MS: u32 = 4_000;

    /// Shown while no profile image has been uploaded
    pub const PLACEHOLDER_AVATAR: &'static str = "https://via.placeholder.com/150";

    /// API base when no window origin is available
    pub const FALLBACK_API_BASE: &'static str = "http://127.0.0.1:8000";
}
