use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use ztconsole_app::GuardOutcome;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod session;

use api::ApiClient;
use components::{Nav, ToastContainer};
use config::Config;
use pages::{Dashboard, Devices, Groups, Login, NotFound, Users};
use session::{provide_session, use_session};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let session = provide_session();
    let config = Config::from_document();
    provide_context(ApiClient::new(&config, session));

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route
                            path=path!("/")
                            view=|| view! { <Guarded view=|| view! { <Devices/> }/> }
                        />
                        <Route
                            path=path!("dashboard")
                            view=|| view! { <Guarded view=|| view! { <Dashboard/> }/> }
                        />
                        <Route
                            path=path!("users")
                            view=|| view! { <Guarded view=|| view! { <Users/> }/> }
                        />
                        <Route
                            path=path!("groups")
                            view=|| view! { <Guarded view=|| view! { <Groups/> }/> }
                        />
                        <Route path=path!("login") view=Login/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}

/// Route wrapper rendering its view only for an established session;
/// anonymous visitors are sent to the login page instead.
#[component]
fn Guarded<F, IV>(
    /// The protected view to render.
    view: F,
) -> impl IntoView
where
    F: Fn() -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let session = use_session();

    move || {
        // Track the session signal so an explicit logout re-evaluates
        // the guard on already-mounted routes.
        session.authenticated().track();
        match session.guard(()) {
            GuardOutcome::Render(()) => view().into_any(),
            GuardOutcome::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
        }
    }
}
