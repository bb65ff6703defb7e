use leptos::prelude::*;

use crate::api::use_api;
use crate::components::StatCard;

/// Dashboard page showing the API's route count and build tag.
#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let routes = LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_routes().await }
    });

    view! {
        <div>
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading…"</p> }>
                {move || {
                    routes.read().as_deref().map(|result| match result {
                        Ok(info) => view! {
                            <div class="stat-grid">
                                <StatCard label="API routes" value=info.count.to_string()/>
                                <StatCard label="Build" value=info.build.clone()/>
                            </div>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load API summary: "} {err.to_string()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
