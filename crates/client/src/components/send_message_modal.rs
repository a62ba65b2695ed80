//! Modal for sending a message through an instance.
//!
//! Two stages: pick a contact (searchable by name or number), then write the
//! message. Ctrl+Enter sends; a success banner shows for two seconds before
//! the modal closes itself.

use dioxus::prelude::*;
use mandazap_shared::{try_error_message, ApiError, Contact};

use crate::auth_session::AuthContext;
use crate::components::qr_code_modal::CloseButton;
use crate::utils::{format_date_time, format_phone, get_initials, sleep_ms};

const MAX_MESSAGE_LEN: usize = 4000;

#[component]
pub fn SendMessageModal(instance_id: String, on_close: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();

    let mut selected_contact = use_signal(|| None::<Contact>);
    let mut message = use_signal(String::new);
    let mut search_term = use_signal(String::new);
    let mut success = use_signal(|| false);
    let mut is_sending = use_signal(|| false);
    let mut send_error = use_signal(|| None::<String>);

    let id_for_fetch = instance_id.clone();
    let contacts = use_resource(move || {
        let id = id_for_fetch.clone();
        async move {
            let mut auth = auth;
            let result = auth.client().instance_contacts(&id).await;
            if let Err(err) = &result {
                auth.handle_unauthorized(err);
            }
            result
        }
    });

    let is_form_valid =
        selected_contact.read().is_some() && !message.read().trim().is_empty();

    let id_for_send = instance_id.clone();
    let send_now = move || {
        let Some(contact) = selected_contact.read().clone() else {
            return;
        };
        let text = message.read().trim().to_string();
        if text.is_empty() || is_sending() {
            return;
        }

        let id = id_for_send.clone();
        spawn(async move {
            let mut auth = auth;
            is_sending.set(true);
            send_error.set(None);

            match auth.client().send_message(&id, &contact.number, &text).await {
                Ok(_) => {
                    success.set(true);
                    message.set(String::new());
                    is_sending.set(false);
                    sleep_ms(2000).await;
                    on_close.call(());
                }
                Err(err) => {
                    crate::log_error!("Send failed: {err}");
                    if !auth.handle_unauthorized(&err) {
                        let msg = match &err {
                            ApiError::Http { body, .. } => try_error_message(body)
                                .unwrap_or_else(|| "Erro desconhecido".to_string()),
                            other => other.to_string(),
                        };
                        send_error.set(Some(msg));
                    }
                    is_sending.set(false);
                }
            }
        });
    };

    let mut send_on_submit = send_now.clone();
    let mut send_on_key = send_now;

    let back_to_contacts = move |_| {
        selected_contact.set(None);
        message.set(String::new());
        success.set(false);
        send_error.set(None);
    };

    // Filter contacts by name or number.
    let term = search_term.read().to_lowercase();
    let filtered: Vec<Contact> = match contacts.read().as_ref() {
        Some(Ok(list)) => list
            .iter()
            .filter(|c| {
                c.name
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&term))
                    .unwrap_or(false)
                    || c.number.contains(term.as_str())
            })
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    let is_loading = contacts.read().is_none();

    let selected_label = selected_contact
        .read()
        .as_ref()
        .map(|c| c.name.clone().unwrap_or_else(|| c.number.clone()))
        .unwrap_or_default();
    let char_count = message.read().chars().count();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            tabindex: "-1",
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div { class: "bg-white rounded-2xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-hidden p-6",
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
                                d: "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
                            }
                        }
                        h3 { class: "text-lg font-semibold", "Enviar Mensagem" }
                    }
                    CloseButton { on_close }
                }

                div { class: "bg-gray-100 rounded-xl p-4 h-96 overflow-y-auto space-y-2",
                    if success() {
                        div { class: "p-4 bg-green-50 border-b border-green-200 rounded-lg",
                            div { class: "flex items-center gap-3 text-green-800",
                                svg {
                                    class: "w-5 h-5",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
                                    }
                                }
                                div {
                                    p { class: "font-medium", "Mensagem enviada com sucesso!" }
                                    p { class: "text-sm text-green-700",
                                        "Sua mensagem foi entregue para {selected_label}"
                                    }
                                }
                            }
                        }
                    }

                    if let Some(err) = send_error.read().as_ref() {
                        div { class: "p-4 bg-red-50 border-b border-red-200 rounded-lg",
                            div { class: "flex items-center gap-3 text-red-800",
                                svg {
                                    class: "w-5 h-5",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
                                    }
                                }
                                div {
                                    p { class: "font-medium", "Erro ao enviar mensagem" }
                                    p { class: "text-sm text-red-700", "{err}" }
                                }
                            }
                        }
                    }

                    if let Some(contact) = selected_contact.read().clone() {
                        div { class: "space-y-4",
                            div { class: "bg-white rounded-lg p-4 flex items-center gap-4",
                                if let Some(pic) = contact.profile_pic.clone() {
                                    img {
                                        class: "w-12 h-12 rounded-full object-cover border-2 border-gray-200",
                                        src: "{pic}",
                                        alt: contact.name.clone().unwrap_or_else(|| contact.number.clone()),
                                    }
                                } else {
                                    div { class: "w-12 h-12 rounded-full bg-gradient-to-br from-green-400 to-green-600 flex items-center justify-center text-white font-semibold",
                                        {get_initials(contact.name.as_deref())}
                                    }
                                }
                                div { class: "flex-1",
                                    p { class: "font-semibold text-gray-900",
                                        {contact.name.clone().unwrap_or_else(|| "Sem nome".to_string())}
                                    }
                                    p { class: "text-sm text-gray-600", {format_phone(&contact.number)} }
                                }
                                button {
                                    class: "text-sm text-green-600 hover:text-green-700 font-medium px-3 py-1 rounded-md hover:bg-green-50 transition-colors",
                                    onclick: back_to_contacts.clone(),
                                    "Trocar contato"
                                }
                            }

                            form {
                                class: "space-y-4",
                                onsubmit: move |e: FormEvent| {
                                    e.prevent_default();
                                    send_on_submit();
                                },
                                div {
                                    label { class: "block text-sm font-semibold text-gray-700 mb-2",
                                        "Mensagem"
                                    }
                                    textarea {
                                        class: "w-full bg-white px-4 py-3 border border-gray-300 rounded-lg focus:ring-1 focus:ring-green-500 focus:border-transparent resize-none outline-none",
                                        placeholder: "Digite sua mensagem aqui...",
                                        rows: "4",
                                        maxlength: "{MAX_MESSAGE_LEN}",
                                        value: "{message}",
                                        oninput: move |e: FormEvent| message.set(e.value()),
                                        onkeydown: move |e: KeyboardEvent| {
                                            if e.key() == Key::Enter && e.modifiers().ctrl() {
                                                e.prevent_default();
                                                send_on_key();
                                            }
                                        },
                                    }
                                    div { class: "flex justify-between items-center mt-1",
                                        p { class: "text-xs text-gray-500", "Pressione Ctrl+Enter para enviar" }
                                        p { class: "text-xs text-gray-500", "{char_count}/{MAX_MESSAGE_LEN}" }
                                    }
                                }

                                div { class: "flex gap-3 pt-2",
                                    button {
                                        r#type: "button",
                                        class: "flex-1 px-4 py-3 border border-gray-300 text-gray-700 rounded-lg font-medium hover:bg-gray-50 transition-colors",
                                        onclick: back_to_contacts,
                                        "Voltar"
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "flex-1 bg-green-600 text-white px-4 py-3 rounded-lg font-semibold hover:bg-green-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2",
                                        disabled: !is_form_valid || is_sending(),
                                        if is_sending() {
                                            div { class: "w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin" }
                                            "Enviando..."
                                        } else {
                                            "Enviar Mensagem"
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "space-y-4",
                            input {
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-1 focus:ring-green-500 bg-white focus:border-transparent outline-none text-sm",
                                r#type: "text",
                                placeholder: "Buscar contato por nome ou número...",
                                value: "{search_term}",
                                oninput: move |e: FormEvent| search_term.set(e.value()),
                            }

                            div { class: "space-y-2 max-h-80 overflow-y-auto",
                                if is_loading {
                                    div { class: "flex items-center justify-center py-8",
                                        div { class: "w-5 h-5 border-2 border-green-600 border-t-transparent rounded-full animate-spin mr-3" }
                                        span { class: "text-gray-600", "Carregando contatos..." }
                                    }
                                } else if filtered.is_empty() {
                                    div { class: "text-center py-8",
                                        p { class: "text-gray-500",
                                            if search_term.read().is_empty() {
                                                "Nenhum contato encontrado."
                                            } else {
                                                "Nenhum contato encontrado para sua busca."
                                            }
                                        }
                                    }
                                } else {
                                    for contact in filtered.iter() {
                                        ContactPickRow {
                                            key: "{contact.id}",
                                            contact: contact.clone(),
                                            on_select: move |contact: Contact| {
                                                selected_contact.set(Some(contact));
                                                search_term.set(String::new());
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactPickRow(contact: Contact, on_select: EventHandler<Contact>) -> Element {
    let contact_for_click = contact.clone();

    rsx! {
        button {
            class: "w-full bg-white hover:bg-gray-50 rounded-lg p-4 flex items-center gap-4 transition-colors text-left",
            onclick: move |_| on_select.call(contact_for_click.clone()),
            if let Some(pic) = contact.profile_pic.clone() {
                img {
                    class: "w-12 h-12 rounded-full object-cover border-2 border-gray-200",
                    src: "{pic}",
                    alt: contact.name.clone().unwrap_or_else(|| contact.number.clone()),
                }
            } else {
                div { class: "w-12 h-12 rounded-full bg-gradient-to-br from-gray-300 to-gray-400 flex items-center justify-center text-white font-semibold border-2 border-gray-200",
                    {get_initials(contact.name.as_deref())}
                }
            }
            div { class: "flex-1 min-w-0",
                p { class: "font-medium text-gray-900 truncate",
                    {contact.name.clone().unwrap_or_else(|| "Sem nome".to_string())}
                }
                p { class: "text-sm text-gray-600", {format_phone(&contact.number)} }
                p { class: "text-xs text-gray-400 mt-1",
                    "Criado em {format_date_time(&contact.created_at)}"
                }
            }
        }
    }
}
