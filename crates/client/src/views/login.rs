//! Login / registration view.

use dioxus::prelude::*;
use mandazap_shared::{try_error_message, ApiError};

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant, InputType, TextInput};
use crate::Route;

/// Single card that toggles between sign-in and sign-up.
#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut is_login = use_signal(|| true);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    use_effect(move || {
        if auth.is_authenticated() {
            nav.push(Route::Dashboard {});
        }
    });

    let handle_submit = move |e: FormEvent| async move {
        e.prevent_default();
        if is_submitting() {
            return;
        }

        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        let name_value = name.read().trim().to_string();

        if email_value.is_empty()
            || password_value.len() < 6
            || (!is_login() && name_value.is_empty())
        {
            error.set(Some(
                "Preencha e-mail e senha (mínimo de 6 caracteres).".to_string(),
            ));
            return;
        }

        is_submitting.set(true);
        error.set(None);

        let result = if is_login() {
            auth.login(&email_value, &password_value).await
        } else {
            auth.register(&email_value, &password_value, &name_value).await
        };

        match result {
            Ok(()) => {
                nav.push(Route::Dashboard {});
            }
            Err(ApiError::Http { body, .. }) => {
                let msg = try_error_message(&body).unwrap_or_else(|| {
                    if is_login() {
                        "Falha no login. Verifique suas credenciais.".to_string()
                    } else {
                        "Falha no cadastro.".to_string()
                    }
                });
                error.set(Some(msg));
            }
            Err(err) => {
                crate::log_error!("Auth request failed: {err}");
                error.set(Some("Não foi possível conectar ao servidor.".to_string()));
            }
        }
        is_submitting.set(false);
    };

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-green-400 to-blue-600 flex items-center justify-center p-4",
            div { class: "bg-white rounded-2xl shadow-2xl w-full max-w-md p-8",
                div { class: "text-center space-y-1 mb-8",
                    div { class: "bg-green-600 p-2 rounded-lg w-fit mx-auto",
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
                    h1 { class: "text-2xl font-bold text-gray-900", "MandaZap" }
                    p { class: "text-gray-600", "Gerencie suas instâncias WhatsApp" }
                }

                form { class: "space-y-6", onsubmit: handle_submit,
                    if !is_login() {
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Nome" }
                            TextInput {
                                value: name.cloned(),
                                placeholder: Some("Seu nome".to_string()),
                                oninput: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Email" }
                        TextInput {
                            value: email.cloned(),
                            placeholder: Some("seu@email.com".to_string()),
                            input_type: Some(InputType::Email),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Senha" }
                        TextInput {
                            value: password.cloned(),
                            placeholder: Some("••••••••".to_string()),
                            input_type: Some(InputType::Password),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }

                    if let Some(e) = error.cloned() {
                        div { class: "p-3 bg-red-50 border border-red-200 rounded-lg",
                            p { class: "text-sm text-red-600", "{e}" }
                        }
                    }

                    Button {
                        r#type: Some("submit".to_string()),
                        variant: Some(ButtonVariant::Primary),
                        class: Some("w-full py-3 font-semibold".to_string()),
                        disabled: Some(is_submitting()),
                        if is_submitting() {
                            "Carregando..."
                        } else if is_login() {
                            "Entrar"
                        } else {
                            "Cadastrar"
                        }
                    }
                }

                div { class: "mt-6 text-center",
                    button {
                        class: "text-green-600 hover:text-green-700 font-medium",
                        onclick: move |_| {
                            is_login.set(!is_login());
                            error.set(None);
                        },
                        if is_login() {
                            "Não tem conta? Cadastre-se"
                        } else {
                            "Já tem conta? Entre"
                        }
                    }
                }
            }
        }
    }
}
