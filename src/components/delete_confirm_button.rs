//! Delete Confirm Button Component
//!
//! Two-step delete for a screen row: × arms it, then confirm or back out.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Question shown while armed
    #[prop(into, default = "Delete?".to_string())]
    confirm_text: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let button_class = StoredValue::new(button_class);
    let confirm_text = StoredValue::new(confirm_text);

    // Clicks must not reach the draggable row underneath
    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let disarm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
        on_confirm.run(());
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{confirm_text.get_value()}</span>
                    <button class="confirm-btn" title="Delete" on:click=confirm>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=disarm>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class=button_class.get_value() title="Delete screen" on:click=arm>
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
