//! Records mirrored from the backend, serialized as camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// --- Identity ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// --- Instances ---

/// Connection status of a WhatsApp instance.
///
/// The backend speaks lowercase strings; anything it sends that we don't
/// recognize collapses to [`InstanceStatus::Unknown`] instead of failing the
/// whole payload.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Connected,
    Connecting,
    Disconnected,
    Unknown,
}

impl InstanceStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "connected" => Self::Connected,
            "connecting" => Self::Connecting,
            "disconnected" => Self::Disconnected,
            _ => Self::Unknown,
        }
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl<'de> Deserialize<'de> for InstanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppInstance {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub status: InstanceStatus,
    /// Pairing QR as a data URL, present while the instance is pairing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

// --- Contacts & messages ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub jid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub instance_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A message row as the backend stores it.
///
/// `id` is the backend's row id; `message_id` is the WhatsApp-side id and is
/// shared by the REST history and the live socket push for the same message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub message_id: String,
    pub from_me: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub r#type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub contact_id: String,
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    pub contact: Contact,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    pub filename: String,
    pub mimetype: String,
    pub size: u64,
    pub path: String,
    pub instance_id: String,
    pub created_at: String,
}

// --- Auth request/response types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

// --- Instance request/response types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub to: String,
    pub message: String,
}

/// Acknowledgement body for connect/disconnect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instance_deserializes_camel_case() {
        let value = json!({
            "id": "inst-1",
            "name": "Vendas",
            "phoneNumber": "5511987654321",
            "status": "connecting",
            "qrCode": "data:image/png;base64,abc",
            "userId": "user-1",
            "createdAt": "2026-01-10T12:00:00.000Z",
            "updatedAt": "2026-01-10T12:05:00.000Z"
        });

        let instance: WhatsAppInstance = serde_json::from_value(value).unwrap();
        assert_eq!(instance.status, InstanceStatus::Connecting);
        assert_eq!(instance.phone_number.as_deref(), Some("5511987654321"));
        assert!(instance.qr_code.is_some());
    }

    #[test]
    fn unknown_status_does_not_fail_the_payload() {
        let value = json!({
            "id": "inst-1",
            "name": "Vendas",
            "status": "restarting",
            "userId": "user-1",
            "createdAt": "2026-01-10T12:00:00.000Z",
            "updatedAt": "2026-01-10T12:00:00.000Z"
        });

        let instance: WhatsAppInstance = serde_json::from_value(value).unwrap();
        assert_eq!(instance.status, InstanceStatus::Unknown);
        // An unknown status is not treated as cleanly disconnected.
        assert!(!instance.status.is_disconnected());
    }

    #[test]
    fn auth_response_uses_snake_case_token_field() {
        let value = json!({
            "user": {
                "id": "user-1",
                "email": "a@b.com",
                "name": "Ana",
                "provider": "local",
                "createdAt": "2026-01-10T12:00:00.000Z",
                "updatedAt": "2026-01-10T12:00:00.000Z"
            },
            "access_token": "jwt-token"
        });

        let auth: AuthResponse = serde_json::from_value(value).unwrap();
        assert_eq!(auth.access_token, "jwt-token");
        assert_eq!(auth.user.name, "Ana");
    }
}
