//! Type-safe profile endpoints

use super::{error::ClientError, typed::AuthenticatedRisClient};
use crate::types::{Profile, ProfileUpdate};
use reqwest::multipart::{Form, Part};

/// Profile endpoints, all bearer-authenticated
impl AuthenticatedRisClient {
    /// Fetch the current user's profile
    pub async fn profile(&self) -> Result<Profile, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/profile/");
        self.execute(req).await
    }

    /// Write the full profile back, with an optional replacement image
    ///
    /// Every field is submitted on every save; the server has no partial
    /// update semantics.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ClientError> {
        let mut form = Form::new()
            .text("full_name", update.full_name)
            .text("email", update.email)
            .text("phone_number", update.phone_number)
            .text("address", update.address);

        if let Some(file) = update.profile_picture {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime_type)?;
            form = form.part("profile_picture", part);
        }

        let req = self
            .request(reqwest::Method::PUT, "/api/profile/")
            .multipart(form);
        self.execute(req).await
    }
}
