//! Group — a named collection of devices that can be isolated as a unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ValidationError};
use crate::id::GroupId;

/// Isolation state of a group, as labelled by the server.
///
/// `Isolate` is a status toggle, not an enforced network policy; the
/// console renders it and offers the restore action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Normal,
    Isolate,
}

impl GroupStatus {
    #[must_use]
    pub fn is_isolated(self) -> bool {
        matches!(self, Self::Isolate)
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Isolate => f.write_str("isolate"),
        }
    }
}

/// A group record as returned by `GET /groups/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: GroupStatus,
}

/// Payload for `POST /groups/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

impl NewGroup {
    /// Check required-field invariants before submitting.
    ///
    /// The description is optional; group-name uniqueness is enforced
    /// server-side and surfaced as a conflict detail string.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_server_record() {
        let json = r#"{"id": 2, "name": "lobby", "description": "ground floor", "status": "normal"}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "lobby");
        assert!(!group.status.is_isolated());
    }

    #[test]
    fn should_deserialize_isolated_status() {
        let json = r#"{"id": 2, "name": "lobby", "status": "isolate"}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert!(group.status.is_isolated());
        assert_eq!(group.description, "");
    }

    #[test]
    fn should_render_status_with_wire_spelling() {
        assert_eq!(GroupStatus::Normal.to_string(), "normal");
        assert_eq!(GroupStatus::Isolate.to_string(), "isolate");
    }

    #[test]
    fn should_reject_payload_when_name_is_empty() {
        let payload = NewGroup {
            name: String::new(),
            description: "whatever".into(),
        };
        assert!(matches!(
            payload.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_accept_payload_without_description() {
        let payload = NewGroup {
            name: "lab".into(),
            description: String::new(),
        };
        assert!(payload.validate().is_ok());
    }
}
