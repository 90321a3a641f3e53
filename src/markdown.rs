//! Markdown Rendering
//!
//! pulldown-cmark with two extras for generated docs:
//! - fenced code blocks highlighted with syntect
//! - screenshots rendered as bounded thumbnails (alt text dropped)

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

/// Parse markdown into HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    InImage { depth: usize },
}

fn transform_events(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img class="doc-screenshot" src="{}" style="max-width: 100%; max-height: 360px; display: block; border-radius: 4px;" />"#,
                        escape_html(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InImage { depth: 0 };
                }
                // Descriptions are user text; show raw HTML instead of running it
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    let dest_url = if is_script_url(&dest_url) { CowStr::from("#") } else { dest_url };
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            // Swallow the alt text until the image closes
            State::InImage { ref mut depth } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(_) => {
                    if *depth == 0 {
                        state = State::Normal;
                    } else {
                        *depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn is_script_url(url: &str) -> bool {
    url.trim_start().to_ascii_lowercase().starts_with("javascript:")
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return plain_code(code);
    };

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain_code(code))
}

fn plain_code(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
