use crate::auth::use_auth;
use crate::config::app_config;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, TextField};
use std::collections::HashMap;

/// Sign-in page. Any non-empty email and password are accepted; the role
/// comes from the email domain.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let config = app_config();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let loading = auth.loading;

    // Already signed in: nothing to do here.
    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match auth.login(email(), password()).await {
            Ok(_) => {
                navigator().replace(Route::Home {});
            }
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                field_errors.set(e.field_errors);
                error_msg.set(Some(e.message));
            }
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardContent {
                    div { class: "login-brand",
                        div { class: "login-logo", "{config.company.logo}" }
                        h1 { class: "login-title", "{config.company.name}" }
                        p { class: "login-tagline", "{config.company.tagline}" }
                    }

                    form { class: "login-form", onsubmit: handle_login,
                        TextField {
                            name: "email",
                            label: "Email Address",
                            input_type: "email",
                            autocomplete: "username",
                            placeholder: "Enter your email",
                            value: email(),
                            disabled: loading(),
                            error: field_error("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        TextField {
                            name: "password",
                            label: "Password",
                            input_type: "password",
                            autocomplete: "current-password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }

                        if let Some(msg) = error_msg() {
                            div { class: "login-error", role: "alert", "{msg}" }
                        }

                        Button {
                            button_type: "submit",
                            full_width: true,
                            loading: loading(),
                            loading_text: "Signing In...",
                            "Sign In"
                        }
                    }

                    if config.features.demo_login_hint {
                        div { class: "login-hint",
                            strong { "Demo Login: " }
                            "Use any email and password to login. "
                            "Emails ending in @team.com, @hr.com or @admin.com sign in as "
                            "Team Manager, HR or Admin."
                        }
                    }
                }
            }
        }
    }
}
