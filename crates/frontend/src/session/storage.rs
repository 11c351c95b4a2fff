//! Token persistence in localStorage
//!
//! Two string values under fixed keys; nothing else is persisted
//! client-side.

use crate::config::SessionConfig;
use crate::session::context::Session;
use gloo::storage::{LocalStorage, Storage};
use ris_http::types::TokenPair;

/// Persist both halves of a freshly minted token pair
pub fn store_tokens(pair: &TokenPair) {
    let _ = LocalStorage::set(SessionConfig::ACCESS_TOKEN_KEY, &pair.access);
    let _ = LocalStorage::set(SessionConfig::REFRESH_TOKEN_KEY, &pair.refresh);
}

/// Read back whatever session localStorage holds
///
/// Any non-empty access token counts as a session; its refresh counterpart
/// rides along when present.
pub fn stored_session() -> Option<Session> {
    let access = access_token()?;
    Some(Session {
        access_token: access,
        refresh_token: refresh_token(),
    })
}

/// The stored access token, if any
pub fn access_token() -> Option<String> {
    LocalStorage::get::<String>(SessionConfig::ACCESS_TOKEN_KEY)
        .ok()
        .filter(|token| !token.is_empty())
}

/// The stored refresh token, if any
pub fn refresh_token() -> Option<String> {
    LocalStorage::get::<String>(SessionConfig::REFRESH_TOKEN_KEY)
        .ok()
        .filter(|token| !token.is_empty())
}

/// Drop the access credential; the refresh token is deliberately left behind
pub fn clear_access_token() {
    LocalStorage::delete(SessionConfig::ACCESS_TOKEN_KEY);
}
