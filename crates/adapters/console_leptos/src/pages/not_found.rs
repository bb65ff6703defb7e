use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h1>"Page not found"</h1>
            <p>
                "The page you requested does not exist. "
                <A href="/">"Back to devices"</A>
            </p>
        </div>
    }
}
