//! Upload Zone Component
//!
//! File picker plus a drop area for screenshots. Files become object URLs
//! and go through `accept_uploads`, which decides what is kept.

use leptos::prelude::*;
use leptos_dragdrop::dropped_files;
use screen_tree::UploadCandidate;
use web_sys::HtmlInputElement;

use crate::context::use_app_context;
use crate::store::{store_accept_uploads, store_screen_count, store_screens, store_screens_untracked};

fn to_candidate(file: &web_sys::File) -> Option<UploadCandidate> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(UploadCandidate {
            name: file.name(),
            mime: file.type_(),
            url,
        }),
        Err(err) => {
            log::error!("[UPLOAD] object URL failed for {}: {:?}", file.name(), err);
            None
        }
    }
}

#[component]
pub fn UploadZone() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let max_files = ctx.config().upload.max_files;
    let (hovering, set_hovering) = signal(false);

    let ingest = move |files: Vec<web_sys::File>| {
        let limits = ctx.config().upload;
        let candidates: Vec<UploadCandidate> = files.iter().filter_map(to_candidate).collect();
        let kept: Vec<String> = candidates.iter().map(|c| c.url.clone()).collect();
        let report = store_accept_uploads(&store, candidates, &limits);

        // Release URLs for files that were refused
        let accepted = store_screens_untracked(&store);
        for url in kept.iter().filter(|url| !accepted.items().iter().any(|s| &s.image == *url)) {
            if let Err(err) = web_sys::Url::revoke_object_url(url) {
                log::warn!("[UPLOAD] could not revoke {}: {:?}", url, err);
            }
        }

        log::info!(
            "[UPLOAD] accepted={} skipped={} over_limit={}",
            report.accepted,
            report.skipped.len(),
            report.over_limit.len()
        );
        ctx.notify(report.notice(&limits));
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let files = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        ingest(files);
        // Let the same file be picked again
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_hovering.set(false);
        ingest(dropped_files(&ev));
    };

    view! {
        <section class="upload-zone">
            <div
                class=move || if hovering.get() { "drop-area hovering" } else { "drop-area" }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_hovering.set(true);
                }
                on:dragleave=move |_| set_hovering.set(false)
                on:drop=on_drop
            >
                <p>"Drop screenshots here or"</p>
                <label class="file-picker">
                    "Choose files"
                    <input type="file" multiple=true accept="image/*" on:change=on_change />
                </label>
                <p class="upload-count">
                    {move || format!("{} / {} screens", store_screen_count(&store), max_files)}
                </p>
            </div>
            <div class="thumb-grid">
                <For
                    each=move || store_screens(&store).items().to_vec()
                    key=|screen| screen.id.clone()
                    children=|screen| {
                        view! { <img class="thumb" src=screen.image alt="" /> }
                    }
                />
            </div>
        </section>
    }
}
