//! Modal dialog wrapper for the create forms.

use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop or the close button invokes
/// `on_close`; clicks inside the dialog do not propagate to the
/// backdrop.
#[component]
pub fn Modal(
    /// Dialog heading.
    #[prop(into)]
    title: String,
    /// Callback when the dialog is dismissed.
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="btn-close" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
