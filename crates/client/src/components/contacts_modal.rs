//! Modal listing an instance's contacts.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::qr_code_modal::CloseButton;
use crate::utils::{format_date_time, format_phone, get_initials};

#[component]
pub fn ContactsModal(instance_id: String, on_close: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();

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

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div { class: "bg-white rounded-2xl p-6 max-w-2xl w-full shadow-lg",
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
                                d: "M17 20h5v-2a4 4 0 00-3-3.87M9 20H4v-2a4 4 0 013-3.87m6-1.13a4 4 0 10-4-4 4 4 0 004 4z",
                            }
                        }
                        h3 { class: "text-lg font-semibold", "Contatos da Instância" }
                    }
                    CloseButton { on_close }
                }

                div { class: "bg-gray-100 rounded-xl p-4 h-96 overflow-y-auto space-y-3",
                    match contacts.read().as_ref() {
                        None => rsx! {
                            p { class: "text-gray-500 text-sm text-center", "Carregando..." }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "text-gray-500 text-sm text-center", "Não foi possível carregar os contatos." }
                        },
                        Some(Ok(contacts)) => rsx! {
                            if contacts.is_empty() {
                                p { class: "text-gray-500 text-sm text-center", "Nenhum contato encontrado." }
                            } else {
                                for contact in contacts.iter() {
                                    div {
                                        key: "{contact.id}",
                                        class: "bg-white rounded-lg p-4 flex items-center gap-4 shadow-sm hover:bg-gray-50 transition",
                                        if let Some(pic) = &contact.profile_pic {
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

                                        div {
                                            p { class: "text-sm font-medium text-gray-800",
                                                {contact.name.clone().unwrap_or_else(|| "Sem nome".to_string())}
                                            }
                                            p { class: "text-xs text-gray-500", {format_phone(&contact.number)} }
                                            p { class: "text-[10px] text-gray-400 mt-0.5",
                                                "Criado em {format_date_time(&contact.created_at)}"
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
