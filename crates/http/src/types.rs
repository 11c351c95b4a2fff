//! Common wire types shared between the frontend and the RIS API

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair returned by a successful login
///
/// The access token is attached to authenticated requests. The refresh
/// token is persisted alongside it but not consumed anywhere yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
}

/// User profile as served by `GET /api/profile/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// URL of the stored profile image, absent until one is uploaded
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Profile fields submitted on save
///
/// The whole profile is written back on every save; there are no partial
/// updates. An optional replacement image rides along as a multipart file.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub profile_picture: Option<UploadFile>,
}

/// An in-memory file destined for a multipart upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Generic success/error envelope used by the register endpoint and by
/// error bodies across the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_uses_server_field_names() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"access":"a-token","refresh":"r-token"}"#).unwrap();
        assert_eq!(pair.access, "a-token");
        assert_eq!(pair.refresh, "r-token");
    }

    #[test]
    fn profile_tolerates_missing_image() {
        let profile: Profile = serde_json::from_str(
            r#"{"full_name":"Jo Riva","email":"jo@ris.example","phone_number":"5551234567","address":"12 Scan St"}"#,
        )
        .unwrap();
        assert_eq!(profile.full_name, "Jo Riva");
        assert!(profile.profile_image.is_none());
    }

    #[test]
    fn register_request_serializes_snake_case() {
        let req = RegisterRequest {
            full_name: "Jo Riva".into(),
            email: "jo@ris.example".into(),
            phone_number: "5551234567".into(),
            address: "12 Scan St".into(),
            password: "hunter2hunter2".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["full_name"], "Jo Riva");
        assert_eq!(value["phone_number"], "5551234567");
    }

    #[test]
    fn api_message_detail_is_optional() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert!(msg.detail.is_none());

        let msg: ApiMessage = serde_json::from_str(r#"{"detail":"already registered"}"#).unwrap();
        assert_eq!(msg.detail.as_deref(), Some("already registered"));
    }
}
