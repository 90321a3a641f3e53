//! Wizard Navigation Component
//!
//! Step pills plus Back/Next. Earlier steps can be revisited from the pills;
//! later ones only through Next, which checks `can_advance`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_screen_count, store_set_step, store_step};
use crate::wizard::WizardStep;

#[component]
pub fn WizardNav() -> impl IntoView {
    let store = use_app_context().store;
    let step = move || store_step(&store);

    let go = move |target: WizardStep| {
        log::info!("[WIZARD] {:?} -> {:?}", store_step(&store), target);
        store_set_step(&store, target);
    };

    let can_next = move || step().next().is_some() && step().can_advance(store_screen_count(&store));

    view! {
        <nav class="wizard-nav">
            <ol class="step-pills">
                {WizardStep::ALL
                    .into_iter()
                    .map(|s| {
                        let class = move || {
                            let current = step();
                            if s == current {
                                "step-pill active"
                            } else if s.number() < current.number() {
                                "step-pill done"
                            } else {
                                "step-pill"
                            }
                        };
                        view! {
                            <li class=class>
                                <button
                                    disabled=move || s.number() > step().number()
                                    on:click=move |_| go(s)
                                >
                                    <span class="step-number">{s.number()}</span>
                                    {s.title()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="step-buttons">
                <button
                    class="back-btn"
                    disabled=move || step().prev().is_none()
                    on:click=move |_| {
                        if let Some(prev) = step().prev() {
                            go(prev);
                        }
                    }
                >
                    "Back"
                </button>
                <Show when=move || step().next().is_some()>
                    <button
                        class="next-btn"
                        disabled=move || !can_next()
                        on:click=move |_| {
                            if let Some(next) = step().next().filter(|_| can_next()) {
                                go(next);
                            }
                        }
                    >
                        "Next"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
