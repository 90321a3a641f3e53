//! Notice Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_dismiss_notice, store_notices};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="notice-bar">
            {move || {
                store_notices(&store)
                    .into_iter()
                    .enumerate()
                    .map(|(i, notice)| {
                        view! {
                            <div class=format!("notice notice-{}", notice.level.as_str())>
                                <span class="notice-text">{notice.message}</span>
                                <button
                                    class="notice-dismiss"
                                    title="Dismiss"
                                    on:click=move |_| store_dismiss_notice(&store, i)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
