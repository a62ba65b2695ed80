//! Per-instance real-time state pushed over the socket.
//!
//! Three maps keyed by instance id, written by the socket manager and read
//! by the dashboard. They live for the lifetime of the page/process and are
//! never persisted; a reload starts from scratch and the REST API is the
//! source of truth again.

use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;
use mandazap_shared::{InstanceStatus, Message, WhatsAppInstance};

/// Latest pairing QR (data URL) per instance. Last write wins.
pub static QR_CODES: GlobalSignal<HashMap<String, String>> = Signal::global(HashMap::new);

/// Latest connection status per instance. Last write wins.
pub static CONNECTION_STATUS: GlobalSignal<HashMap<String, InstanceStatus>> =
    Signal::global(HashMap::new);

/// Messages pushed live and not yet reconciled with fetched history, per
/// instance. Appended unconditionally at ingestion; deduplication happens at
/// render time via [`merge_with_history`].
pub static RECENT_MESSAGES: GlobalSignal<HashMap<String, Vec<Message>>> =
    Signal::global(HashMap::new);

pub fn set_qr_code(instance_id: &str, qr_code: &str) {
    QR_CODES
        .write()
        .insert(instance_id.to_string(), qr_code.to_string());
}

pub fn remove_qr_code(instance_id: &str) {
    QR_CODES.write().remove(instance_id);
}

pub fn set_connection_status(instance_id: &str, status: InstanceStatus) {
    CONNECTION_STATUS
        .write()
        .insert(instance_id.to_string(), status);
}

pub fn push_recent_message(instance_id: &str, message: Message) {
    RECENT_MESSAGES
        .write()
        .entry(instance_id.to_string())
        .or_default()
        .push(message);
}

/// Mark an instance's live messages as read.
pub fn clear_recent_messages(instance_id: &str) {
    if let Some(messages) = RECENT_MESSAGES.write().get_mut(instance_id) {
        messages.clear();
    }
}

/// Drop everything (logout).
pub fn clear_all() {
    QR_CODES.write().clear();
    CONNECTION_STATUS.write().clear();
    RECENT_MESSAGES.write().clear();
}

pub fn recent_messages(instance_id: &str) -> Vec<Message> {
    RECENT_MESSAGES
        .read()
        .get(instance_id)
        .cloned()
        .unwrap_or_default()
}

/// Effective status of an instance: the socket-pushed status when we have
/// one, otherwise whatever the REST API last said.
pub fn live_status(instance: &WhatsAppInstance) -> InstanceStatus {
    CONNECTION_STATUS
        .read()
        .get(&instance.id)
        .copied()
        .unwrap_or(instance.status)
}

pub fn unread_count(instance_id: &str) -> usize {
    RECENT_MESSAGES
        .read()
        .get(instance_id)
        .map(Vec::len)
        .unwrap_or(0)
}

pub fn total_unread() -> usize {
    RECENT_MESSAGES.read().values().map(Vec::len).sum()
}

/// Reconcile fetched history with live-pushed messages.
///
/// `message_id` is the deduplication key: a message present in both lists is
/// kept once, sourced from the fetched history. Display order is history
/// first, then the remaining live messages in arrival order; there is no
/// chronological guarantee across that boundary.
pub fn merge_with_history(history: &[Message], live: &[Message]) -> Vec<Message> {
    let seen: HashSet<&str> = history.iter().map(|m| m.message_id.as_str()).collect();

    history
        .iter()
        .cloned()
        .chain(
            live.iter()
                .filter(|m| !seen.contains(m.message_id.as_str()))
                .cloned(),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::merge_with_history;
    use mandazap_shared::{Contact, Message};

    fn contact() -> Contact {
        Contact {
            id: "contact-1".into(),
            jid: "5511987654321@s.whatsapp.net".into(),
            name: Some("Ana".into()),
            number: "5511987654321".into(),
            profile_pic: None,
            instance_id: "inst-1".into(),
            created_at: "2026-01-10T12:00:00.000Z".into(),
            updated_at: "2026-01-10T12:00:00.000Z".into(),
        }
    }

    fn message(id: &str, message_id: &str, text: &str) -> Message {
        Message {
            id: id.into(),
            message_id: message_id.into(),
            from_me: false,
            text: Some(text.into()),
            r#type: "text".into(),
            timestamp: "2026-01-10T12:00:00Z".parse().unwrap(),
            status: None,
            contact_id: "contact-1".into(),
            instance_id: "inst-1".into(),
            media_id: None,
            contact: contact(),
            created_at: "2026-01-10T12:00:00.000Z".into(),
        }
    }

    #[test]
    fn history_comes_first_then_live() {
        let history = vec![message("1", "wa-1", "oi"), message("2", "wa-2", "tudo bem?")];
        let live = vec![message("x", "wa-3", "cheguei agora")];

        let merged = merge_with_history(&history, &live);
        let ids: Vec<&str> = merged.iter().map(|m| m.message_id.as_str()).collect();
        assert_eq!(ids, ["wa-1", "wa-2", "wa-3"]);
    }

    #[test]
    fn overlapping_message_is_shown_once_from_history() {
        let history = vec![message("1", "wa-1", "persisted copy")];
        let live = vec![message("x", "wa-1", "live copy"), message("y", "wa-2", "novo")];

        let merged = merge_with_history(&history, &live);
        assert_eq!(merged.len(), 2);
        // The surviving wa-1 is the history row, not the live push.
        assert_eq!(merged[0].id, "1");
        assert_eq!(merged[0].text.as_deref(), Some("persisted copy"));
        assert_eq!(merged[1].message_id, "wa-2");
    }

    #[test]
    fn live_duplicates_survive_ingestion_but_not_history_overlap() {
        // Ingestion never dedups, so the same live push twice stays twice
        // as long as history hasn't caught up...
        let live = vec![message("x", "wa-9", "dup"), message("y", "wa-9", "dup")];
        let merged = merge_with_history(&[], &live);
        assert_eq!(merged.len(), 2);

        // ...and collapses to the fetched row once it has.
        let history = vec![message("1", "wa-9", "dup")];
        let merged = merge_with_history(&history, &live);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "1");
    }

    #[test]
    fn empty_inputs() {
        assert!(merge_with_history(&[], &[]).is_empty());

        let history = vec![message("1", "wa-1", "oi")];
        assert_eq!(merge_with_history(&history, &[]).len(), 1);
    }
}
