//! Real-time events pushed by the backend over the WebSocket.
//!
//! Each text frame carries exactly one event, tagged by name:
//!
//! ```json
//! {"event": "qr-code", "data": {"instanceId": "...", "qrCode": "data:image/png;..."}}
//! ```
//!
//! A frame that fails to parse (e.g. an event name this client doesn't know)
//! is dropped by the reader; it must never tear down the connection.

use serde::{Deserialize, Serialize};

use crate::models::{InstanceStatus, Message};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A fresh pairing QR for an instance. Overwrites any previous one.
    #[serde(rename_all = "camelCase")]
    QrCode { instance_id: String, qr_code: String },

    /// Connection status change for an instance. Last write wins.
    #[serde(rename_all = "camelCase")]
    ConnectionUpdate {
        instance_id: String,
        status: InstanceStatus,
    },

    /// A message arrived on an instance.
    #[serde(rename_all = "camelCase")]
    MessageReceived {
        instance_id: String,
        message: Message,
    },
}

impl ServerEvent {
    /// The instance this event belongs to.
    pub fn instance_id(&self) -> &str {
        match self {
            Self::QrCode { instance_id, .. }
            | Self::ConnectionUpdate { instance_id, .. }
            | Self::MessageReceived { instance_id, .. } => instance_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn qr_code_event_parses() {
        let frame = json!({
            "event": "qr-code",
            "data": { "instanceId": "inst-1", "qrCode": "data:image/png;base64,abc" }
        });

        let event: ServerEvent = serde_json::from_value(frame).unwrap();
        match event {
            ServerEvent::QrCode { instance_id, qr_code } => {
                assert_eq!(instance_id, "inst-1");
                assert!(qr_code.starts_with("data:image/png"));
            }
            other => panic!("wrong event: {other:?}"),
        }
    }

    #[test]
    fn connection_update_tolerates_new_statuses() {
        let frame = json!({
            "event": "connection-update",
            "data": { "instanceId": "inst-1", "status": "pairing" }
        });

        let event: ServerEvent = serde_json::from_value(frame).unwrap();
        assert_eq!(event.instance_id(), "inst-1");
        match event {
            ServerEvent::ConnectionUpdate { status, .. } => {
                assert_eq!(status, InstanceStatus::Unknown);
            }
            other => panic!("wrong event: {other:?}"),
        }
    }

    #[test]
    fn unknown_event_name_is_an_error_not_a_panic() {
        let frame = json!({
            "event": "presence-update",
            "data": { "instanceId": "inst-1" }
        });

        assert!(serde_json::from_value::<ServerEvent>(frame).is_err());
    }
}
