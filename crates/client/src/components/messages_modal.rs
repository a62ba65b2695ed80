//! Modal listing an instance's messages.
//!
//! History comes from the REST API; live messages pushed over the socket are
//! appended after it, deduplicated by `message_id` at render time. Clicking
//! the modal body marks the instance's live messages as read.

use std::collections::HashSet;

use dioxus::prelude::*;
use mandazap_shared::Message;

use crate::auth_session::AuthContext;
use crate::components::qr_code_modal::CloseButton;
use crate::stores;
use crate::utils::{format_time, get_initials};

#[component]
pub fn MessagesModal(instance_id: String, on_close: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();

    let id_for_fetch = instance_id.clone();
    let history = use_resource(move || {
        let id = id_for_fetch.clone();
        async move {
            let mut auth = auth;
            let result = auth.client().instance_messages(&id).await;
            if let Err(err) = &result {
                auth.handle_unauthorized(err);
            }
            result
        }
    });

    // Live-pushed messages and their ids, for dedup and for the highlight.
    let live = stores::recent_messages(&instance_id);
    let live_ids: HashSet<String> = live.iter().map(|m| m.message_id.clone()).collect();

    let is_loading = history.read().is_none();
    let merged: Vec<Message> = match history.read().as_ref() {
        Some(Ok(fetched)) => stores::merge_with_history(fetched, &live),
        // History failed or still loading: show what the socket brought in.
        _ => live.clone(),
    };

    // Keep the list pinned to the newest message.
    use_effect(move || {
        let _ = history.read();
        let _ = stores::RECENT_MESSAGES.read();
        scroll_to_bottom();
    });

    let id_for_click = instance_id.clone();

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div {
                class: "bg-white rounded-2xl p-6 max-w-2xl w-full shadow-lg",
                onclick: move |_| stores::clear_recent_messages(&id_for_click),
                div { class: "flex items-center justify-between mb-4",
                    div { class: "flex items-center gap-2",
                        svg {
                            class: "w-6 h-6 text-green-600",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
                            }
                        }
                        h3 { class: "text-lg font-semibold", "Mensagens da Instância" }
                    }
                    CloseButton { on_close }
                }

                div {
                    id: "messages-container",
                    class: "bg-gray-100 rounded-xl p-4 h-96 overflow-y-auto space-y-2",
                    if is_loading {
                        p { class: "text-gray-500 text-sm text-center", "Carregando..." }
                    } else if merged.is_empty() {
                        p { class: "text-gray-500 text-sm text-center", "Nenhuma mensagem encontrada." }
                    } else {
                        for message in merged.iter() {
                            MessageRow {
                                key: "{message.message_id}",
                                message: message.clone(),
                                is_live: live_ids.contains(&message.message_id),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message, is_live: bool) -> Element {
    let contact_label = message
        .contact
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| Some(message.contact.number.as_str()).filter(|s| !s.is_empty()))
        .unwrap_or("Contato")
        .to_string();

    let initials = get_initials(message.contact.name.as_deref());
    let time = format_time(&message.timestamp);

    let highlight = if is_live {
        "ring-1 shadow-md shadow-green-500/30 ring-green-500"
    } else {
        ""
    };

    rsx! {
        div { class: "flex justify-start",
            div { class: "flex items-end gap-2 w-full",
                div { class: "min-w-12 min-h-12 rounded-full bg-gradient-to-br from-gray-300 to-gray-400 flex items-center justify-center text-white font-semibold border-2 border-gray-200",
                    "{initials}"
                }

                div { class: "rounded-xl px-4 py-2 text-sm shadow relative bg-white text-gray-800 rounded-bl-none w-full {highlight}",
                    p { class: "text-xs text-gray-500 mb-1 font-medium", "{contact_label}" }

                    if let Some(text) = &message.text {
                        p { class: "whitespace-pre-line break-words", "{text}" }
                    }

                    span { class: "block text-[10px] mt-1 text-gray-300 text-right", "{time}" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_bottom() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(container) = document.get_element_by_id("messages-container") {
            container.set_scroll_top(container.scroll_height());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_bottom() {}
