//! Dashboard view: header plus the instance grid.

use dioxus::prelude::*;
use mandazap_shared::{ApiError, WhatsAppInstance};

use crate::auth_session::AuthContext;
use crate::components::{CreateInstanceModal, InstanceCard};
use crate::hooks::use_refreshable_resource;
use crate::socket::SOCKET_STATE;
use crate::stores;
use crate::utils::get_initials;
use crate::Route;

/// Output type of the instance-list resource; children refresh it through
/// `use_refresh_resource::<InstancesResult>()` after mutations.
pub type InstancesResult = Result<Vec<WhatsAppInstance>, ApiError>;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut show_create_modal = use_signal(|| false);

    // No session: back to the login screen.
    use_effect(move || {
        if !auth.is_authenticated() {
            nav.push(Route::Login {});
        }
    });

    let instances = use_refreshable_resource(move || async move {
        let mut auth = auth;
        if !auth.is_authenticated() {
            return Err(ApiError::Network("not authenticated".to_string()));
        }
        let result = auth.client().list_instances().await;
        if let Err(err) = &result {
            auth.handle_unauthorized(err);
        }
        result
    });

    // Instances fetched while pairing already carry a QR; seed the store so
    // the card shows "Ver QR Code" without waiting for a socket push.
    use_effect(move || {
        if let Some(Ok(list)) = instances.read().as_ref() {
            for instance in list {
                if let Some(qr) = &instance.qr_code {
                    stores::set_qr_code(&instance.id, qr);
                }
            }
        }
    });

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            DashboardHeader {}

            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div { class: "flex justify-between items-center mb-8",
                    div {
                        h2 { class: "text-2xl font-bold text-gray-900", "Suas Instâncias" }
                        p { class: "text-gray-600", "Gerencie suas conexões WhatsApp" }
                    }
                    button {
                        class: "bg-green-600 text-white px-6 py-3 rounded-lg hover:bg-green-700 transition-colors flex items-center space-x-2 shadow-lg outline-none",
                        onclick: move |_| show_create_modal.set(true),
                        PlusIcon {}
                        span { "Nova Instância" }
                    }
                }

                match instances.read().as_ref() {
                    None => rsx! {
                        div { class: "flex items-center justify-center py-24",
                            div { class: "text-center",
                                div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-green-600 mx-auto mb-4" }
                                p { class: "text-gray-600", "Carregando instâncias..." }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "flex items-center justify-center py-24",
                            div { class: "text-center",
                                p { class: "text-red-600 font-medium mb-1", "Erro ao carregar instâncias" }
                                p { class: "text-sm text-gray-500", "{e}" }
                            }
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        if list.is_empty() {
                            div { class: "text-center py-12",
                                h3 { class: "text-lg font-medium text-gray-900 mb-2",
                                    "Nenhuma instância encontrada"
                                }
                                p { class: "text-gray-600 mb-6", "Crie sua primeira instância para começar" }
                                button {
                                    class: "bg-green-600 text-white px-6 py-3 rounded-lg hover:bg-green-700 transition-colors inline-flex items-center space-x-2",
                                    onclick: move |_| show_create_modal.set(true),
                                    PlusIcon {}
                                    span { "Criar Instância" }
                                }
                            }
                        } else {
                            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                                for instance in list.iter() {
                                    InstanceCard { key: "{instance.id}", instance: instance.clone() }
                                }
                            }
                        }
                    },
                }
            }

            if show_create_modal() {
                CreateInstanceModal { on_close: move |_| show_create_modal.set(false) }
            }
        }
    }
}

#[component]
fn DashboardHeader() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let initials = get_initials(auth.user.read().as_ref().map(|u| u.name.as_str()));

    let socket_state = SOCKET_STATE.read().clone();
    let (dot_class, dot_title) = if socket_state.is_connected() {
        ("bg-green-500", "Tempo real conectado")
    } else if socket_state.is_connecting() {
        ("bg-yellow-400 animate-pulse", "Conectando…")
    } else {
        ("bg-gray-300", "Tempo real desconectado")
    };

    rsx! {
        header { class: "bg-white shadow-md border-b border-gray-200 py-1",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center h-16",
                    div { class: "flex items-center gap-3",
                        div { class: "bg-gradient-to-r from-green-600 to-green-700 p-3 rounded-xl w-fit shadow-lg",
                            svg {
                                class: "w-6 h-6 text-white",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M8 10h8m-8 4h5m-9 6l2.5-2.5A2 2 0 017.9 17H18a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v14z",
                                }
                            }
                        }
                        h1 { class: "text-xl font-semibold text-gray-900", "MandaZap" }
                        span {
                            class: "w-2.5 h-2.5 rounded-full {dot_class}",
                            title: "{dot_title}",
                        }
                    }

                    div { class: "flex items-center space-x-4",
                        div { class: "w-12 h-12 rounded-full bg-gradient-to-br from-gray-300 to-gray-400 flex items-center justify-center text-white font-semibold border-2 border-gray-200",
                            "{initials}"
                        }
                        button {
                            class: "text-gray-600 hover:text-gray-900 transition-colors",
                            title: "Sair",
                            onclick: move |_| {
                                auth.logout();
                                nav.push(Route::Login {});
                            },
                            svg {
                                class: "w-5 h-5",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1",
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
fn PlusIcon() -> Element {
    rsx! {
        svg {
            class: "w-5 h-5",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M12 4v16m8-8H4",
            }
        }
    }
}
