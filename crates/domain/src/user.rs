//! User — a platform account that can own devices and sign in.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ValidationError};
use crate::id::UserId;

/// A user record as returned by `GET /users/`.
///
/// The password never appears in responses; `role` is assigned by the
/// server (`admin` or `user`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: String,
}

/// Sign-in input for the token exchange.
///
/// Kept separate from [`NewUser`]: this never travels as JSON, the
/// token endpoint takes it form-encoded.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Check required-field invariants before submitting.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when `username` or
    /// `password` is empty.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }
        Ok(())
    }
}

/// Payload for `POST /users/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    /// Check required-field invariants before submitting.
    ///
    /// Username uniqueness is enforced server-side only.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when `username` or
    /// `password` is empty.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_server_record() {
        let json = r#"{"id": 1, "username": "admin", "role": "admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_i64(), 1);
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn should_accept_payload_with_both_fields() {
        let payload = NewUser {
            username: "bob".into(),
            password: "hunter2".into(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn should_reject_payload_when_username_is_blank() {
        let payload = NewUser {
            username: " ".into(),
            password: "hunter2".into(),
        };
        assert!(matches!(
            payload.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyUsername))
        ));
    }

    #[test]
    fn should_reject_payload_when_password_is_empty() {
        let payload = NewUser {
            username: "bob".into(),
            password: String::new(),
        };
        assert!(matches!(
            payload.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyPassword))
        ));
    }

    #[test]
    fn should_accept_credentials_with_both_fields() {
        let credentials = Credentials {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn should_reject_credentials_when_username_is_blank() {
        let credentials = Credentials {
            username: "  ".into(),
            password: "hunter2".into(),
        };
        assert!(matches!(
            credentials.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyUsername))
        ));
    }

    #[test]
    fn should_reject_credentials_when_password_is_empty() {
        let credentials = Credentials {
            username: "admin".into(),
            password: String::new(),
        };
        assert!(matches!(
            credentials.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyPassword))
        ));
    }
}
