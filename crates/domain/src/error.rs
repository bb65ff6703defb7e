//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! the console adapter maps HTTP failures into its own error type and
//! never reaches for `String` variants here.

use thiserror::Error;

/// Client-side invariant violations caught before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("device type must not be empty")]
    EmptyDeviceType,
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Base error type for the console domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: ConsoleError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            ConsoleError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_human_readable_message() {
        let err: ConsoleError = ValidationError::EmptyPassword.into();
        assert_eq!(err.to_string(), "validation error: password must not be empty");
    }
}
