//! Profile API service

use crate::client::{ClientError, create_authenticated_client};
use ris_http::types::{Profile, ProfileUpdate};

/// Profile API service
#[derive(Clone)]
pub struct ProfileService;

impl ProfileService {
    /// Create a new profile service
    pub fn new() -> Self {
        Self
    }

    /// Fetch the current user's profile
    pub async fn fetch(&self) -> Result<Profile, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;

        client.profile().await
    }

    /// Write the full profile back, with an optional replacement image
    pub async fn update(&self, update: ProfileUpdate) -> Result<Profile, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;

        client.update_profile(update).await
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
