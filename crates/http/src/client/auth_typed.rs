//! Type-safe authentication endpoints

use super::{error::ClientError, typed::PublicRisClient};
use crate::types::{ApiMessage, LoginRequest, RegisterRequest, TokenPair};

/// Authentication endpoints, all public
impl PublicRisClient {
    /// Exchange credentials for a token pair
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/login/")
            .json(&request);
        self.execute(req).await
    }

    /// Register a new account
    pub async fn register(&self, request: RegisterRequest) -> Result<ApiMessage, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/register/")
            .json(&request);
        self.execute(req).await
    }
}
