//! Client error types

use crate::types::ApiMessage;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the bearer credential was rejected outright
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Extract the server-provided `detail` field, if the error body carried one
    ///
    /// Error bodies are stored verbatim; the API wraps human-readable
    /// messages as `{"detail": "..."}`. Plain-text bodies yield `None`.
    pub fn detail(&self) -> Option<String> {
        let body = match self {
            Self::ServerError { message, .. } => message,
            Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message) => message,
            _ => return None,
        };

        serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|msg| msg.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_codes_map_to_tagged_variants() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "bad".into()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "no".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, "no".into()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "gone".into()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ClientError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn only_unauthorized_counts_as_expired_auth() {
        let unauthorized = ClientError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(unauthorized.is_auth_expired());

        let forbidden = ClientError::from_status(StatusCode::FORBIDDEN, String::new());
        assert!(!forbidden.is_auth_expired());
    }

    #[test]
    fn detail_extracted_from_json_error_body() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Invalid credentials"}"#.into(),
        );
        assert_eq!(err.detail().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn detail_absent_for_plain_text_body() {
        let err =
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "upstream blew up".into());
        assert!(err.detail().is_none());
    }

    #[test]
    fn detail_absent_for_configuration_errors() {
        let err = ClientError::Configuration("base_url is required".into());
        assert!(err.detail().is_none());
    }
}
