//! Authentication API service

use crate::client::{ClientError, create_public_client};
use ris_http::types::{ApiMessage, LoginRequest, RegisterRequest, TokenPair};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Exchange credentials for a token pair
    pub async fn login(&self, email: String, password: String) -> Result<TokenPair, ClientError> {
        let client = create_public_client()?;
        client.login(LoginRequest { email, password }).await
    }

    /// Submit a registration
    pub async fn register(&self, request: RegisterRequest) -> Result<ApiMessage, ClientError> {
        let client = create_public_client()?;
        client.register(request).await
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
