//! Activity Log Component
//!
//! Collapsible view of the in-memory log buffer.

use leptos::prelude::*;

const SHOWN_LINES: usize = 30;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    // The buffer is not reactive; bump this to re-read it
    let (refresh, set_refresh) = signal(0u32);

    let lines = move || {
        refresh.track();
        rolling_logger::recent(SHOWN_LINES)
    };

    view! {
        <footer class="activity-log">
            <div class="activity-log-header">
                <button class="toggle-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                    {move || if open.get() { "Hide activity" } else { "Show activity" }}
                </button>
                <Show when=move || open.get()>
                    <button class="refresh-btn" on:click=move |_| set_refresh.update(|n| *n += 1)>
                        "Refresh"
                    </button>
                </Show>
            </div>
            <Show when=move || open.get()>
                <pre class="activity-lines">
                    {move || lines().iter().map(|line| format!("{}\n", line)).collect::<String>()}
                </pre>
            </Show>
        </footer>
    }
}
