//! Group table component with the isolate/restore actions.

use leptos::prelude::*;
use ztconsole_domain::group::{Group, GroupStatus};
use ztconsole_domain::id::GroupId;

/// A table displaying a list of groups with per-row actions.
#[component]
pub fn GroupTable(
    /// The list of groups to display.
    groups: Vec<Group>,
    /// Callback to isolate every device in a group.
    #[prop(into)]
    on_isolate: Callback<GroupId>,
    /// Callback to clear a group's isolation.
    #[prop(into)]
    on_restore: Callback<GroupId>,
) -> impl IntoView {
    if groups.is_empty() {
        view! {
            <p>"No groups found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {groups.into_iter().map(|group| {
                        view! {
                            <GroupRow group on_isolate on_restore/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the group table.
#[component]
fn GroupRow(
    /// The group to display.
    group: Group,
    /// Callback to isolate the group.
    #[prop(into)]
    on_isolate: Callback<GroupId>,
    /// Callback to restore the group.
    #[prop(into)]
    on_restore: Callback<GroupId>,
) -> impl IntoView {
    let id = group.id;
    let isolated = group.status.is_isolated();

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{group.name}</td>
            <td>{group.description}</td>
            <td>
                <StatusBadge status=group.status/>
            </td>
            <td>
                <button
                    class="btn-danger"
                    disabled=isolated
                    on:click=move |_| on_isolate.run(id)
                >
                    "Isolate"
                </button>
                <button
                    class="btn-primary"
                    disabled=!isolated
                    on:click=move |_| on_restore.run(id)
                >
                    "Restore"
                </button>
            </td>
        </tr>
    }
}

/// A badge displaying a group's isolation state.
#[component]
fn StatusBadge(
    /// The group status to display.
    status: GroupStatus,
) -> impl IntoView {
    let status_class = if status.is_isolated() {
        "badge-isolate"
    } else {
        "badge-normal"
    };
    let label = if status.is_isolated() { "isolated" } else { "normal" };

    view! {
        <span class=format!("badge {status_class}")>
            {label}
        </span>
    }
}
