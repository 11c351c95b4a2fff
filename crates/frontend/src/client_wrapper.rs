//! Wrapped client that handles session expiry automatically

use ris_http::client::{AuthenticatedRisClient, error::ClientError};
use ris_http::types::{Profile, ProfileUpdate};

/// Wrapper around AuthenticatedRisClient that reports rejected credentials
///
/// Any request failing with an authentication error fires the global
/// session-expired handler before the error propagates, so the session
/// context can clear itself without every caller checking.
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedRisClient,
}

impl WrappedAuthClient {
    /// Create a new wrapped client
    pub fn new(client: AuthenticatedRisClient) -> Self {
        Self { inner: client }
    }

    fn guard<T>(result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(error) = &result {
            if error.is_auth_expired() {
                crate::session::error_handler::trigger_session_expired();
            }
        }
        result
    }

    /// Fetch the current user's profile (requires authentication)
    pub async fn profile(&self) -> Result<Profile, ClientError> {
        Self::guard(self.inner.profile().await)
    }

    /// Write the full profile back (requires authentication)
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ClientError> {
        Self::guard(self.inner.update_profile(update).await)
    }

    /// Get a reference to the inner client (use sparingly - prefer wrapped methods)
    pub fn inner(&self) -> &AuthenticatedRisClient {
        &self.inner
    }
}
