//! Socket lifecycle management and event fan-in.

use std::rc::Rc;

use dioxus::prelude::*;
use mandazap_shared::ServerEvent;

use super::connection::{ConnectionState, SocketConnection};
use crate::auth_session::AuthContext;
use crate::stores;

const BASE_TITLE: &str = "MandaZap";

/// Connection state of the session socket, for UI indicators
pub static SOCKET_STATE: GlobalSignal<ConnectionState> =
    Signal::global(|| ConnectionState::Disconnected);

/// Fold one event into the per-instance stores.
///
/// QR and status entries are overwritten unconditionally (last write wins);
/// messages are appended without deduplication — reconciliation against
/// fetched history happens at render time.
fn apply_event(event: ServerEvent) {
    match event {
        ServerEvent::QrCode {
            instance_id,
            qr_code,
        } => stores::set_qr_code(&instance_id, &qr_code),
        ServerEvent::ConnectionUpdate {
            instance_id,
            status,
        } => stores::set_connection_status(&instance_id, status),
        ServerEvent::MessageReceived {
            instance_id,
            message,
        } => stores::push_recent_message(&instance_id, message),
    }
}

fn apply_state(state: ConnectionState) {
    *SOCKET_STATE.write() = state;
}

/// Component that keeps exactly one socket alive per authenticated session
#[component]
pub fn SocketManager(children: Element) -> Element {
    let auth = use_context::<AuthContext>();

    let mut active = use_signal(|| None::<Rc<SocketConnection>>);
    let mut last_token = use_signal(|| None::<String>);

    use_effect(move || {
        let token = auth.token.read().clone();
        let has_user = auth.user.read().is_some();

        // Session changed (logout or a different login): drop the old socket.
        if *last_token.read() != token {
            if let Some(connection) = active.write().take() {
                crate::log_info!("Session changed, closing socket");
                connection.shutdown();
            }
            last_token.set(token.clone());
        }

        // Open the socket once both the token and the profile are in.
        if token.is_some() && has_user && active.read().is_none() {
            if let Some(url) = auth.socket_url() {
                crate::log_info!("Opening event socket");
                let connection = SocketConnection::new(url, apply_event, apply_state);
                active.write().replace(Rc::new(connection));
            }
        }
    });

    // Unread counter in the page/window title.
    let unread = use_memo(stores::total_unread);
    let title = if unread() > 0 {
        format!("({}) {BASE_TITLE}", unread())
    } else {
        BASE_TITLE.to_string()
    };

    rsx! {
        document::Title { "{title}" }
        {children}
    }
}
