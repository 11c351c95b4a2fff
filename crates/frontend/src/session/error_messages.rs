//! User-facing messages for failed profile loads
//!
//! The full-screen error state distinguishes why the load failed instead of
//! collapsing every cause into one string.

use ris_http::client::error::ClientError;

/// Message for the error state shown when the profile cannot be loaded
pub fn profile_load_error(error: &ClientError) -> String {
    match error {
        ClientError::AuthenticationFailed(_) => {
            "Your session has expired. Please log in again.".to_string()
        }
        ClientError::NotFound(_) => "Profile not found.".to_string(),
        ClientError::Request(_) => "Network error. Check your connection and try again.".to_string(),
        _ => "Failed to load user data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn rejected_credential_reads_as_expired_session() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert_eq!(
            profile_load_error(&err),
            "Your session has expired. Please log in again."
        );
    }

    #[test]
    fn missing_profile_is_distinguished() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, String::new());
        assert_eq!(profile_load_error(&err), "Profile not found.");
    }

    #[test]
    fn other_server_errors_fall_back_to_the_generic_message() {
        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert_eq!(profile_load_error(&err), "Failed to load user data");
    }
}
