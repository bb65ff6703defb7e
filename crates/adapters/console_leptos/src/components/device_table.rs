//! Device table component for displaying a list of devices.

use leptos::prelude::*;
use ztconsole_domain::device::Device;

/// A table displaying a list of devices.
#[component]
pub fn DeviceTable(
    /// The list of devices to display.
    devices: Vec<Device>,
) -> impl IntoView {
    if devices.is_empty() {
        view! {
            <p>"No devices found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"IP address"</th>
                        <th>"Owner"</th>
                        <th>"Group"</th>
                    </tr>
                </thead>
                <tbody>
                    {devices.into_iter().map(|device| {
                        view! {
                            <DeviceRow device/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the device table.
#[component]
fn DeviceRow(
    /// The device to display.
    device: Device,
) -> impl IntoView {
    let id = device.id.to_string();
    let name = device.name;
    let kind = device.kind;
    let status = device.status;
    let ip_address = device.ip_address.unwrap_or_else(|| "—".to_string());
    let owner = device.owner.unwrap_or_else(|| "—".to_string());
    let group = device.group.unwrap_or_else(|| "—".to_string());

    view! {
        <tr>
            <td>{id}</td>
            <td>{name}</td>
            <td>{kind}</td>
            <td>
                <StatusBadge status/>
            </td>
            <td>{ip_address}</td>
            <td>{owner}</td>
            <td>{group}</td>
        </tr>
    }
}

/// A badge displaying a device status with appropriate styling.
#[component]
fn StatusBadge(
    /// The reported status, if any.
    status: Option<String>,
) -> impl IntoView {
    let status_class = match status.as_deref() {
        Some("online") => "badge-online",
        Some("isolate") => "badge-isolate",
        Some("offline") => "badge-offline",
        _ => "badge-unknown",
    };
    let status_text = status.unwrap_or_else(|| "unknown".to_string());

    view! {
        <span class=format!("badge {status_class}")>
            {status_text}
        </span>
    }
}
