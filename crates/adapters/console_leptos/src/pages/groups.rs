use leptos::prelude::*;
use leptos::task::spawn_local;
use ztconsole_domain::group::NewGroup;
use ztconsole_domain::id::GroupId;

use crate::api::use_api;
use crate::components::{GroupTable, Modal, use_toasts};

/// Groups page listing all groups with isolate/restore actions and a
/// create dialog.
#[component]
pub fn Groups() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();

    let (reload, set_reload) = signal(0_u32);

    let groups = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            reload.track();
            async move { api.list_groups().await }
        }
    });

    // The list is re-fetched only after the server confirms the action,
    // so a failed call leaves the rendered state untouched.
    let on_isolate = Callback::new({
        let api = api.clone();
        let toasts = toasts.clone();
        move |id: GroupId| {
            let api = api.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match api.isolate_group(id).await {
                    Ok(reply) => {
                        toasts.push_success(reply.summary());
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => toasts.push_error(format!("Failed to isolate group: {err}")),
                }
            });
        }
    });
    let on_restore = Callback::new({
        let api = api.clone();
        let toasts = toasts.clone();
        move |id: GroupId| {
            let api = api.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match api.restore_group(id).await {
                    Ok(reply) => {
                        toasts.push_success(reply.summary());
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => toasts.push_error(format!("Failed to restore group: {err}")),
                }
            });
        }
    });

    let (show_create, set_show_create) = signal(false);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_create = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let payload = NewGroup {
            name: name.get_untracked(),
            description: description.get_untracked(),
        };
        if let Err(err) = payload.validate() {
            toasts.push_error(err.to_string());
            return;
        }

        let api = api.clone();
        let toasts = toasts.clone();
        spawn_local(async move {
            match api.create_group(&payload).await {
                Ok(created) => {
                    toasts.push_success(format!("Group \"{}\" created", created.name));
                    set_show_create.set(false);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => toasts.push_error(format!("Failed to create group: {err}")),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Groups"</h1>
                <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                    "New group"
                </button>
            </div>
            <Suspense fallback=move || view! { <p>"Loading groups…"</p> }>
                {move || {
                    groups.read().as_deref().map(|result| match result {
                        Ok(list) => view! {
                            <GroupTable groups=list.clone() on_isolate on_restore/>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load groups: "} {err.to_string()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
            <Show when=move || show_create.get()>
                <Modal title="New group" on_close=move |()| set_show_create.set(false)>
                    <form on:submit=move |ev| on_create.run(ev)>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Description"
                            <input
                                type="text"
                                prop:value=description
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn-primary">"Create"</button>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
