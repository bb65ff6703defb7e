//! Shell navigation bar with the login/logout action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::use_toasts;
use crate::session::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        toasts.push_success("Signed out".to_string());
        navigate("/login", Default::default());
    };

    view! {
        <nav>
            <span class="nav-brand">"IoT Zero Trust Console"</span>
            <ul>
                <li><a href="/dashboard">"Dashboard"</a></li>
                <li><a href="/">"Devices"</a></li>
                <li><a href="/users">"Users"</a></li>
                <li><a href="/groups">"Groups"</a></li>
            </ul>
            <div class="nav-session">
                {move || {
                    if session.authenticated().get() {
                        let on_logout = on_logout.clone();
                        view! {
                            <button class="btn-logout" on:click=on_logout>
                                "Log out"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <A href="/login">"Log in"</A>
                        }
                        .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
