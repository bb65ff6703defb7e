use leptos::prelude::*;
use leptos::task::spawn_local;
use ztconsole_domain::device::NewDevice;
use ztconsole_domain::id::{GroupId, UserId};

use crate::api::use_api;
use crate::components::{DeviceTable, Modal, use_toasts};

/// Devices page listing all devices with a create dialog.
#[component]
pub fn Devices() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();

    let (reload, set_reload) = signal(0_u32);

    let devices = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            reload.track();
            async move { api.list_devices().await }
        }
    });
    // Owners and groups are only needed to populate the create form
    // selects; they are fetched alongside the table.
    let users = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            reload.track();
            async move { api.list_users().await }
        }
    });
    let groups = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            reload.track();
            async move { api.list_groups().await }
        }
    });

    // Device creation needs at least one account to pick an owner from.
    let has_users = move || {
        users
            .read()
            .as_deref()
            .and_then(|result| result.as_ref().ok().map(|list| !list.is_empty()))
            .unwrap_or(false)
    };

    let (show_create, set_show_create) = signal(false);
    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (owner, set_owner) = signal(String::new());
    let (group, set_group) = signal(String::new());

    let on_create = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let payload = NewDevice {
            name: name.get_untracked(),
            kind: kind.get_untracked(),
            owner_id: owner.get_untracked().parse::<i64>().ok().map(UserId::new),
            group_id: group.get_untracked().parse::<i64>().ok().map(GroupId::new),
        };
        if let Err(err) = payload.validate() {
            toasts.push_error(err.to_string());
            return;
        }

        let api = api.clone();
        let toasts = toasts.clone();
        spawn_local(async move {
            match api.create_device(&payload).await {
                Ok(created) => {
                    toasts.push_success(format!("Device \"{}\" created", created.name));
                    set_show_create.set(false);
                    set_name.set(String::new());
                    set_kind.set(String::new());
                    set_owner.set(String::new());
                    set_group.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => toasts.push_error(format!("Failed to create device: {err}")),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Devices"</h1>
                <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                    "New device"
                </button>
            </div>
            <Suspense fallback=move || view! { <p>"Loading devices…"</p> }>
                {move || {
                    devices.read().as_deref().map(|result| match result {
                        Ok(list) => view! { <DeviceTable devices=list.clone()/> }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load devices: "} {err.to_string()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
            <Show when=move || show_create.get()>
                <Modal title="New device" on_close=move |()| set_show_create.set(false)>
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
                            "Type"
                            <input
                                type="text"
                                placeholder="camera, sensor, gateway…"
                                prop:value=kind
                                on:input=move |ev| set_kind.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Owner"
                            <select
                                prop:value=owner
                                on:change=move |ev| set_owner.set(event_target_value(&ev))
                            >
                                <option value="">"No owner"</option>
                                {move || {
                                    users
                                        .read()
                                        .as_deref()
                                        .and_then(|result| result.as_ref().ok().cloned())
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|user| {
                                            view! {
                                                <option value=user.id.to_string()>
                                                    {user.username}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <label>
                            "Group"
                            <select
                                prop:value=group
                                on:change=move |ev| set_group.set(event_target_value(&ev))
                            >
                                <option value="">"No group"</option>
                                {move || {
                                    groups
                                        .read()
                                        .as_deref()
                                        .and_then(|result| result.as_ref().ok().cloned())
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|group| {
                                            view! {
                                                <option value=group.id.to_string()>
                                                    {group.name}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <button type="submit" class="btn-primary" disabled=move || !has_users()>
                            "Create"
                        </button>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
