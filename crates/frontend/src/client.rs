//! Client configuration and initialization

use crate::client_wrapper::WrappedAuthClient;
use crate::config::UiConfig;
use once_cell::sync::Lazy;
pub use ris_http::client::error::ClientError;
use ris_http::client::{PublicRisClient, TypedClientBuilder};
use std::sync::Mutex;
use web_sys::window;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicRisClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<WrappedAuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    UiConfig::FALLBACK_API_BASE.to_string()
}

/// Get the public client instance (for the login and register endpoints)
pub fn create_public_client() -> Result<PublicRisClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        Ok(client.clone())
    } else {
        let client = TypedClientBuilder::new()
            .base_url(get_base_url())
            .build_public()?;
        *client_lock = Some(client.clone());
        Ok(client)
    }
}

/// Get the authenticated client instance (returns None if not authenticated)
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    let client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");
    Ok(client_lock.clone())
}

/// Install or clear the authenticated client for the given access token
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(token) = token {
        let client = TypedClientBuilder::new()
            .base_url(get_base_url())
            .build_authenticated(token)?;
        *auth_lock = Some(WrappedAuthClient::new(client));
    } else {
        *auth_lock = None;
    }

    Ok(())
}
