//! Markdown View Component

use leptos::prelude::*;

use crate::markdown::parse_markdown;

/// Renders markdown as HTML
#[component]
pub fn MarkdownView(#[prop(into)] source: Signal<String>) -> impl IntoView {
    let html = Memo::new(move |_| parse_markdown(&source.get()));

    view! { <div class="markdown-body" inner_html=move || html.get()></div> }
}
