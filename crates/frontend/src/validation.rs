//! Local registration checks, run before any network call

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

/// A failed registration check; the message is shown to the user verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long!")]
    PasswordTooShort,
    #[error("Please enter a valid email address!")]
    InvalidEmail,
    #[error("Phone number must be 10 digits long!")]
    InvalidPhoneNumber,
}

/// The registration fields subject to local checks
pub struct RegistrationForm<'a> {
    pub email: &'a str,
    pub phone_number: &'a str,
    pub password: &'a str,
    pub verify_password: &'a str,
}

/// Validate a registration, stopping at the first failed check
///
/// Check order: password confirmation, password length, email shape,
/// phone shape.
pub fn validate_registration(form: &RegistrationForm<'_>) -> Result<(), ValidationError> {
    if form.password != form.verify_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if form.password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    if !EMAIL_PATTERN.is_match(form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !PHONE_PATTERN.is_match(form.phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form<'a>(
        email: &'a str,
        phone_number: &'a str,
        password: &'a str,
        verify_password: &'a str,
    ) -> RegistrationForm<'a> {
        RegistrationForm {
            email,
            phone_number,
            password,
            verify_password,
        }
    }

    #[test]
    fn valid_registration_passes() {
        let result = validate_registration(&form(
            "jo@ris.example",
            "5551234567",
            "scanner-room-4",
            "scanner-room-4",
        ));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn mismatched_passwords_fail_first() {
        // Mismatch wins even though the password is also too short
        let result = validate_registration(&form("not-an-email", "12", "short", "different"));
        assert_eq!(result, Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn short_password_fails_before_email_check() {
        let result = validate_registration(&form("not-an-email", "12", "seven77", "seven77"));
        assert_eq!(result, Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["plainaddress", "missing@tld", "two@@ris.example", "sp ace@ris.example"] {
            let result =
                validate_registration(&form(email, "5551234567", "long-enough", "long-enough"));
            assert_eq!(result, Err(ValidationError::InvalidEmail), "email: {email}");
        }
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for phone in ["555123456", "55512345678", "555-123-456", "phone12345"] {
            let result =
                validate_registration(&form("jo@ris.example", phone, "long-enough", "long-enough"));
            assert_eq!(
                result,
                Err(ValidationError::InvalidPhoneNumber),
                "phone: {phone}"
            );
        }
    }

    #[test]
    fn messages_match_the_notifications() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match!"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long!"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address!"
        );
        assert_eq!(
            ValidationError::InvalidPhoneNumber.to_string(),
            "Phone number must be 10 digits long!"
        );
    }
}
