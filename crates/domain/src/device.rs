//! Device — a managed endpoint as reported by the platform API.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ValidationError};
use crate::id::{DeviceId, GroupId, UserId};

/// A device record as returned by `GET /devices/`.
///
/// The server resolves `owner` and `group` to display names; the record
/// is read fresh on every view mount and never cached client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    /// Device category such as `camera`, `sensor`, or `gateway`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

/// Payload for `POST /devices/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewDevice {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl NewDevice {
    /// Check required-field invariants before submitting.
    ///
    /// Uniqueness of the device name is enforced by the server only and
    /// comes back as an error detail string.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when `name` or `kind` is
    /// empty.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyDeviceType.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_server_record() {
        let json = r#"{
            "id": 3,
            "name": "front-door-cam",
            "type": "camera",
            "status": "online",
            "ip_address": "10.0.0.12",
            "owner": "alice",
            "group": "lobby"
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id.as_i64(), 3);
        assert_eq!(device.kind, "camera");
        assert_eq!(device.owner.as_deref(), Some("alice"));
    }

    #[test]
    fn should_tolerate_missing_optional_columns() {
        let json = r#"{"id": 1, "name": "probe", "type": "sensor"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.status.is_none());
        assert!(device.ip_address.is_none());
        assert!(device.group.is_none());
    }

    #[test]
    fn should_serialize_payload_with_wire_field_names() {
        let payload = NewDevice {
            name: "probe".into(),
            kind: "sensor".into(),
            owner_id: Some(UserId::new(2)),
            group_id: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "sensor");
        assert_eq!(json["owner_id"], 2);
        assert!(json.get("group_id").is_none());
    }

    #[test]
    fn should_reject_payload_when_name_is_empty() {
        let payload = NewDevice {
            name: "  ".into(),
            kind: "sensor".into(),
            owner_id: None,
            group_id: None,
        };
        assert!(matches!(
            payload.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_payload_when_type_is_empty() {
        let payload = NewDevice {
            name: "probe".into(),
            kind: String::new(),
            owner_id: None,
            group_id: None,
        };
        assert!(matches!(
            payload.validate(),
            Err(ConsoleError::Validation(ValidationError::EmptyDeviceType))
        ));
    }
}
