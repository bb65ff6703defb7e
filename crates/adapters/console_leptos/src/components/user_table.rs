//! User table component for displaying a list of users.

use leptos::prelude::*;
use ztconsole_domain::user::User;

/// A table displaying a list of users.
#[component]
pub fn UserTable(
    /// The list of users to display.
    users: Vec<User>,
) -> impl IntoView {
    if users.is_empty() {
        view! {
            <p>"No users found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Role"</th>
                    </tr>
                </thead>
                <tbody>
                    {users.into_iter().map(|user| {
                        view! {
                            <tr>
                                <td>{user.id.to_string()}</td>
                                <td>{user.username}</td>
                                <td>{user.role}</td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}
