//! Modal for creating a new instance.

use dioxus::prelude::*;
use mandazap_shared::{try_error_message, ApiError};

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant};
use crate::hooks::use_refresh_resource;
use crate::views::InstancesResult;

#[component]
pub fn CreateInstanceModal(on_close: EventHandler<()>) -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut refresh = use_refresh_resource::<InstancesResult>();

    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_creating = use_signal(|| false);

    let handle_submit = move |e: FormEvent| async move {
        e.prevent_default();
        let instance_name = name.read().trim().to_string();
        if instance_name.is_empty() {
            return;
        }

        is_creating.set(true);
        error.set(None);

        match auth.client().create_instance(&instance_name).await {
            Ok(_) => {
                refresh.write();
                name.set(String::new());
                on_close.call(());
            }
            Err(err) => {
                if !auth.handle_unauthorized(&err) {
                    let msg = match &err {
                        ApiError::Http { body, .. } => try_error_message(body)
                            .unwrap_or_else(|| "Erro ao criar instância.".to_string()),
                        _ => "Erro ao criar instância.".to_string(),
                    };
                    error.set(Some(msg));
                }
            }
        }
        is_creating.set(false);
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div { class: "bg-white rounded-2xl p-6 max-w-md w-full",
                h3 { class: "text-lg font-semibold mb-4", "Nova Instância" }

                form { onsubmit: handle_submit,
                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2",
                            "Nome da Instância"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-green-500 focus:border-transparent outline-none",
                            r#type: "text",
                            placeholder: "Ex: Vendas, Suporte, Pessoal...",
                            value: "{name}",
                            oninput: move |e: FormEvent| {
                                name.set(e.value());
                                error.set(None);
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "mb-4 p-3 bg-red-50 border border-red-200 rounded-lg",
                            p { class: "text-sm text-red-600", "{err}" }
                        }
                    }

                    div { class: "flex space-x-3",
                        Button {
                            variant: Some(ButtonVariant::Secondary),
                            class: Some("flex-1".to_string()),
                            onclick: move |_| on_close.call(()),
                            "Cancelar"
                        }
                        Button {
                            r#type: Some("submit".to_string()),
                            variant: Some(ButtonVariant::Primary),
                            class: Some("flex-1".to_string()),
                            disabled: Some(is_creating()),
                            if is_creating() {
                                "Criando..."
                            } else {
                                "Criar"
                            }
                        }
                    }
                }
            }
        }
    }
}
