//! Per-instance card: status, unread badge, connect/disconnect and modals.

use dioxus::prelude::*;
use mandazap_shared::WhatsAppInstance;

use crate::auth_session::AuthContext;
use crate::components::{ContactsModal, MessagesModal, QrCodeModal, SendMessageModal, StatusBadge};
use crate::hooks::use_refresh_resource;
use crate::stores;
use crate::views::InstancesResult;

#[derive(Clone, Copy, PartialEq)]
enum CardModal {
    Qr,
    Messages,
    Contacts,
    Send,
}

#[component]
pub fn InstanceCard(instance: WhatsAppInstance) -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut refresh = use_refresh_resource::<InstancesResult>();

    let mut show_modal = use_signal(|| None::<CardModal>);
    let mut is_connecting = use_signal(|| false);
    let mut is_disconnecting = use_signal(|| false);

    // Socket-pushed state wins over what the REST fetch said.
    let status = stores::live_status(&instance);
    let unread = stores::unread_count(&instance.id);
    let instance_qr = stores::QR_CODES.read().get(&instance.id).cloned();

    let connect_id = instance.id.clone();
    let on_connect = move |_| {
        let id = connect_id.clone();
        spawn(async move {
            is_connecting.set(true);
            match auth.client().connect_instance(&id).await {
                Ok(_) => {
                    refresh.write();
                    show_modal.set(None);
                }
                Err(err) => {
                    crate::log_error!("Connect failed: {err}");
                    auth.handle_unauthorized(&err);
                }
            }
            is_connecting.set(false);
        });
    };

    let disconnect_id = instance.id.clone();
    let on_disconnect = move |_| {
        let id = disconnect_id.clone();
        spawn(async move {
            is_disconnecting.set(true);
            match auth.client().disconnect_instance(&id).await {
                Ok(_) => {
                    // The pairing QR is dead once the session is torn down.
                    stores::remove_qr_code(&id);
                    refresh.write();
                }
                Err(err) => {
                    crate::log_error!("Disconnect failed: {err}");
                    auth.handle_unauthorized(&err);
                }
            }
            is_disconnecting.set(false);
        });
    };

    let ring_class = if unread > 0 {
        "ring-1 shadow-green-500/30 ring-green-500"
    } else {
        ""
    };

    rsx! {
        div { class: "bg-white rounded-xl shadow-lg p-6 hover:shadow-xl transition-shadow relative {ring_class}",
            if unread > 0 {
                div { class: "absolute -top-2 -right-2 bg-green-600 text-white rounded-xl w-6 h-6 flex items-center justify-center text-xs",
                    "{unread}"
                }
            }

            div { class: "flex items-center justify-between mb-4",
                div { class: "flex items-center space-x-3",
                    div { class: "bg-green-100 p-2 rounded-lg",
                        svg {
                            class: "w-6 h-6 text-green-600",
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
                    div {
                        h3 { class: "font-semibold text-lg", "{instance.name}" }
                        if let Some(phone) = &instance.phone_number {
                            p { class: "text-gray-600 text-sm flex items-center",
                                svg {
                                    class: "w-3 h-3 mr-1",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 7V5z",
                                    }
                                }
                                "{phone}"
                            }
                        }
                    }
                }
                StatusBadge { status }
            }

            div { class: "space-y-2",
                div { class: "flex space-x-2",
                    if status.is_disconnected() {
                        button {
                            class: "flex-1 bg-green-600 text-white py-2 px-4 rounded-lg hover:bg-green-700 transition-colors disabled:opacity-50 flex items-center justify-center",
                            disabled: is_connecting(),
                            onclick: on_connect,
                            if is_connecting() {
                                "Conectando..."
                            } else {
                                "Conectar"
                            }
                        }
                    } else {
                        button {
                            class: "flex-1 bg-red-600 text-white py-2 px-4 rounded-lg hover:bg-red-700 transition-colors disabled:opacity-50 flex items-center justify-center",
                            disabled: is_disconnecting(),
                            onclick: on_disconnect,
                            if is_disconnecting() {
                                "Desconectando..."
                            } else {
                                "Desconectar"
                            }
                        }
                    }
                    button {
                        class: "bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700 transition-colors flex items-center",
                        title: "Contatos",
                        onclick: move |_| show_modal.set(Some(CardModal::Contacts)),
                        svg {
                            class: "w-4 h-4",
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
                    }
                    button {
                        class: "bg-purple-600 text-white py-2 px-4 rounded-lg hover:bg-purple-700 transition-colors flex items-center",
                        title: "Enviar mensagem",
                        onclick: move |_| show_modal.set(Some(CardModal::Send)),
                        svg {
                            class: "w-4 h-4",
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
                    }
                }

                button {
                    class: "flex-1 w-full py-2 px-4 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors disabled:opacity-50 flex items-center justify-center",
                    disabled: is_disconnecting(),
                    onclick: move |_| show_modal.set(Some(CardModal::Messages)),
                    svg {
                        class: "w-4 h-4 mr-2",
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
                    "Ver mensagens"
                }

                if instance_qr.is_some() {
                    button {
                        class: "flex-1 w-full py-2 px-4 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors disabled:opacity-50 flex items-center justify-center",
                        disabled: is_disconnecting(),
                        onclick: move |_| show_modal.set(Some(CardModal::Qr)),
                        svg {
                            class: "w-4 h-4 mr-2",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M15 12a3 3 0 11-6 0 3 3 0 016 0z M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
                            }
                        }
                        "Ver QR Code"
                    }
                }
            }

            match show_modal() {
                Some(CardModal::Qr) => rsx! {
                    if let Some(qr) = instance_qr.clone() {
                        QrCodeModal { qr_code: qr, on_close: move |_| show_modal.set(None) }
                    }
                },
                Some(CardModal::Messages) => rsx! {
                    MessagesModal {
                        instance_id: instance.id.clone(),
                        on_close: move |_| show_modal.set(None),
                    }
                },
                Some(CardModal::Contacts) => rsx! {
                    ContactsModal {
                        instance_id: instance.id.clone(),
                        on_close: move |_| show_modal.set(None),
                    }
                },
                Some(CardModal::Send) => rsx! {
                    SendMessageModal {
                        instance_id: instance.id.clone(),
                        on_close: move |_| show_modal.set(None),
                    }
                },
                None => rsx! {},
            }
        }
    }
}
