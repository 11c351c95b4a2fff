//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = "ris-client/0.1.0";

/// Client for the public endpoints (login, register)
#[derive(Clone)]
pub struct PublicRisClient {
    client: Client,
    base_url: String,
}

/// Client for the profile endpoints, carrying a bearer access token
#[derive(Clone)]
pub struct AuthenticatedRisClient {
    client: Client,
    base_url: String,
    access_token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    let builder = ClientBuilder::new().user_agent(USER_AGENT);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };

    // Timeouts are not supported by reqwest on wasm
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;

    Ok(builder.build()?)
}

impl PublicRisClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach an access token, producing an authenticated client
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedRisClient {
        AuthenticatedRisClient {
            client: self.client,
            base_url: self.base_url,
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedRisClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        TypedClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(access_token)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Create a public client sharing this client's connection pool
    pub fn to_public(&self) -> PublicRisClient {
        PublicRisClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Type-safe builder that creates the appropriate client type
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn parts(self) -> Result<(Client, String), ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();
        let client = build_http_client(self.timeout)?;
        Ok((client, base_url))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicRisClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(PublicRisClient { client, base_url })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedRisClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(AuthenticatedRisClient {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let result = TypedClientBuilder::new().build_public();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = PublicRisClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn authenticate_keeps_base_url() {
        let client = PublicRisClient::new("http://127.0.0.1:8000").unwrap();
        let authed = client.authenticate("token-123");
        assert_eq!(authed.base_url(), "http://127.0.0.1:8000");
        assert_eq!(authed.to_public().base_url(), "http://127.0.0.1:8000");
    }
}
