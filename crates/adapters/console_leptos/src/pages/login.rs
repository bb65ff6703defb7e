use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use ztconsole_domain::user::Credentials;

use crate::api::{ApiError, use_api};
use crate::components::use_toasts;
use crate::session::use_session;

/// Login page exchanging credentials for a bearer token.
#[component]
pub fn Login() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(err) = credentials.validate() {
            toasts.push_error(err.to_string());
            return;
        }

        let api = api.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api.login(&credentials).await {
                Ok(token) => {
                    session.login(&token);
                    toasts.push_success(format!("Welcome, {}", credentials.username));
                    navigate(
                        "/",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(ApiError::Unauthorized) => {
                    toasts.push_error("Invalid username or password".to_string());
                }
                Err(err) => {
                    toasts.push_error(format!("Login failed: {err}"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in…" } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
