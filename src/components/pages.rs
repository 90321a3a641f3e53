//! Wizard Pages
//!
//! One component per wizard step.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::artifacts::{self, ArtifactKind};
use crate::components::{MarkdownView, NotesEditor, NotesField, ScreensList, UploadZone};
use crate::context::use_app_context;
use crate::models::{Artifact, Notice};
use crate::store::{store_artifact, store_notes_untracked, store_screens, store_screens_untracked, store_set_artifact};

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Upload your screens"</h2>
            <p class="page-intro">"Add screenshots of every screen in your app. PNG, JPG and other image formats work."</p>
            <UploadZone />
        </section>
    }
}

#[component]
pub fn DescribePage() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Describe your screens"</h2>
            <p class="page-intro">"Explain what each screen does and arrange them in the order users see them."</p>
            <ScreensList editable=true />
        </section>
    }
}

#[component]
pub fn BackendLogicPage() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Backend logic"</h2>
            <NotesEditor
                field=NotesField::BackendLogic
                placeholder="Data the app stores, business rules, integrations..."
            />
        </section>
    }
}

#[component]
pub fn AppFlowPage() -> impl IntoView {
    let store = use_app_context().store;
    let outline = Signal::derive(move || artifacts::flow_outline(&store_screens(&store)));

    view! {
        <section class="page two-column">
            <div>
                <h2>"App flow"</h2>
                <NotesEditor
                    field=NotesField::AppFlow
                    placeholder="How does a user move between screens?"
                />
            </div>
            <aside>
                <h3>"Screen outline"</h3>
                <MarkdownView source=outline />
            </aside>
        </section>
    }
}

#[component]
pub fn ScreenDocsPage() -> impl IntoView {
    let store = use_app_context().store;
    let docs = Signal::derive(move || {
        let screens = store_screens(&store);
        artifacts::outline(&screens)
            .iter()
            .map(|entry| artifacts::screen_doc(&screens, entry))
            .collect::<Vec<_>>()
            .join("\n---\n\n")
    });

    view! {
        <section class="page two-column">
            <div>
                <h2>"Screen docs"</h2>
                <ScreensList editable=false />
            </div>
            <MarkdownView source=docs />
        </section>
    }
}

#[component]
pub fn ArtifactsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (selected, set_selected) = signal(ArtifactKind::UserStories);
    let (generating, set_generating) = signal::<Option<ArtifactKind>>(None);

    let generate = move |kind: ArtifactKind| {
        if generating.get_untracked().is_some() {
            return;
        }
        set_generating.set(Some(kind));
        let delay_ms = ctx.config().generation.delay_ms;
        log::info!("[ARTIFACTS] generating {:?}", kind);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            let markdown = artifacts::render(kind, &store_screens_untracked(&store), &store_notes_untracked(&store));
            store_set_artifact(&store, Artifact { kind, markdown });
            set_generating.set(None);
            ctx.notify(Notice::success(format!("{} generated", kind.title())));
        });
    };

    let current = move || store_artifact(&store, selected.get());
    let body = Signal::derive(move || current().map(|a| a.markdown).unwrap_or_default());

    view! {
        <section class="page">
            <h2>"Artifacts"</h2>
            <div class="artifact-tabs">
                {ArtifactKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class=move || if selected.get() == kind { "tab active" } else { "tab" }
                                on:click=move |_| set_selected.set(kind)
                            >
                                {kind.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="artifact-actions">
                <button
                    class="generate-btn"
                    disabled=move || generating.get().is_some()
                    on:click=move |_| generate(selected.get_untracked())
                >
                    {move || match generating.get() {
                        Some(kind) => format!("Generating {}...", kind.title()),
                        None if current().is_some() => "Regenerate".to_string(),
                        None => "Generate".to_string(),
                    }}
                </button>
                {move || {
                    current()
                        .map(|artifact| {
                            view! {
                                <a
                                    class="download-btn"
                                    href=artifacts::download_href(&artifact.markdown)
                                    download=artifact.kind.file_name()
                                >
                                    "Download .md"
                                </a>
                            }
                        })
                }}
            </div>
            <Show
                when=move || current().is_some()
                fallback=|| view! { <p class="empty">"Nothing generated yet."</p> }
            >
                <MarkdownView source=body />
            </Show>
        </section>
    }
}
