use leptos::prelude::*;
use leptos::task::spawn_local;
use ztconsole_domain::user::NewUser;

use crate::api::use_api;
use crate::components::{Modal, UserTable, use_toasts};

/// Users page listing all accounts with a create dialog.
#[component]
pub fn Users() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();

    let (reload, set_reload) = signal(0_u32);

    let users = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            reload.track();
            async move { api.list_users().await }
        }
    });

    let (show_create, set_show_create) = signal(false);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_create = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let payload = NewUser {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(err) = payload.validate() {
            toasts.push_error(err.to_string());
            return;
        }

        let api = api.clone();
        let toasts = toasts.clone();
        spawn_local(async move {
            match api.create_user(&payload).await {
                Ok(created) => {
                    toasts.push_success(format!("User \"{}\" created", created.username));
                    set_show_create.set(false);
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => toasts.push_error(format!("Failed to create user: {err}")),
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <h1>"Users"</h1>
                <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                    "New user"
                </button>
            </div>
            <Suspense fallback=move || view! { <p>"Loading users…"</p> }>
                {move || {
                    users.read().as_deref().map(|result| match result {
                        Ok(list) => view! { <UserTable users=list.clone()/> }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load users: "} {err.to_string()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
            <Show when=move || show_create.get()>
                <Modal title="New user" on_close=move |()| set_show_create.set(false)>
                    <form on:submit=move |ev| on_create.run(ev)>
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
                        <button type="submit" class="btn-primary">"Create"</button>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
