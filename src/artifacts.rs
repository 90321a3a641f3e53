//! Mocked Artifacts
//!
//! Markdown documents assembled from the screen list, the user's notes and
//! canned sample text. Nothing here calls a model; the UI adds a fake delay.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::json;

use crate::models::{ProjectNotes, ScreenItem, ScreenList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    UserStories,
    ApiDocs,
    DatabaseSchema,
    Prd,
    Frd,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::UserStories,
        ArtifactKind::ApiDocs,
        ArtifactKind::DatabaseSchema,
        ArtifactKind::Prd,
        ArtifactKind::Frd,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ArtifactKind::UserStories => "User stories",
            ArtifactKind::ApiDocs => "API docs",
            ArtifactKind::DatabaseSchema => "Database schema",
            ArtifactKind::Prd => "PRD",
            ArtifactKind::Frd => "FRD",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::UserStories => "user-stories.md",
            ArtifactKind::ApiDocs => "api-docs.md",
            ArtifactKind::DatabaseSchema => "database-schema.md",
            ArtifactKind::Prd => "prd.md",
            ArtifactKind::Frd => "frd.md",
        }
    }
}

/// A screen with its outline label ("2", "2.1") and title
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry<'a> {
    pub label: String,
    pub title: String,
    pub depth: usize,
    pub item: &'a ScreenItem,
}

/// Roots in list order, each followed by all of its children.
///
/// Unlike the on-screen tree this ignores `is_expanded`.
pub fn outline(list: &ScreenList) -> Vec<OutlineEntry<'_>> {
    let mut entries = Vec::new();
    let roots = list
        .items()
        .iter()
        .filter(|item| match &item.parent_id {
            None => true,
            Some(parent) => list.find(parent).is_none(),
        });
    for (r, root) in roots.enumerate() {
        let label = (r + 1).to_string();
        entries.push(OutlineEntry {
            title: screen_title(root, &label),
            label: label.clone(),
            depth: 0,
            item: root,
        });
        for (c, child) in list.children(&root.id).enumerate() {
            let child_label = format!("{}.{}", label, c + 1);
            entries.push(OutlineEntry {
                title: screen_title(child, &child_label),
                label: child_label,
                depth: 1,
                item: child,
            });
        }
    }
    entries
}

/// First description line, or "Screen <label>" when the user wrote nothing
pub fn screen_title(item: &ScreenItem, label: &str) -> String {
    item.title()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Screen {}", label))
}

pub fn flow_outline(list: &ScreenList) -> String {
    if list.is_empty() {
        return "_No screens uploaded yet._\n".to_string();
    }
    outline(list)
        .iter()
        .map(|entry| format!("{}- **{}** {}\n", "  ".repeat(entry.depth), entry.label, entry.title))
        .collect()
}

/// Markdown page documenting one screen
pub fn screen_doc(list: &ScreenList, entry: &OutlineEntry<'_>) -> String {
    let mut doc = format!("## {} {}\n\n", entry.label, entry.title);
    doc.push_str(&format!("![{}]({})\n\n", entry.title, entry.item.image));

    doc.push_str("### Description\n\n");
    if entry.item.description.trim().is_empty() {
        doc.push_str("_No description yet._\n\n");
    } else {
        doc.push_str(entry.item.description.trim());
        doc.push_str("\n\n");
    }

    if let Some(parent) = entry.item.parent_id.as_ref().and_then(|p| list.find(p)) {
        let parent_label = outline(list)
            .into_iter()
            .find(|e| e.item.id == parent.id)
            .map(|e| e.title)
            .unwrap_or_default();
        doc.push_str(&format!("Reached from **{}**.\n\n", parent_label));
    }

    let children: Vec<_> = list.children(&entry.item.id).collect();
    if !children.is_empty() {
        doc.push_str("### Nested screens\n\n");
        for (i, child) in children.iter().enumerate() {
            let label = format!("{}.{}", entry.label, i + 1);
            doc.push_str(&format!("- {}\n", screen_title(child, &label)));
        }
        doc.push('\n');
    }

    doc.push_str("### Components\n\n");
    doc.push_str("- Header with navigation\n- Primary content area\n- Call-to-action button\n");
    doc
}

pub fn render(kind: ArtifactKind, list: &ScreenList, notes: &ProjectNotes) -> String {
    match kind {
        ArtifactKind::UserStories => user_stories(list),
        ArtifactKind::ApiDocs => api_docs(list),
        ArtifactKind::DatabaseSchema => database_schema(),
        ArtifactKind::Prd => prd(list, notes),
        ArtifactKind::Frd => frd(list, notes),
    }
}

fn user_stories(list: &ScreenList) -> String {
    let mut doc = String::from("# User Stories\n\n");
    for (i, entry) in outline(list).iter().enumerate() {
        doc.push_str(&format!("## US-{:03}: {}\n\n", i + 1, entry.title));
        doc.push_str(&format!(
            "**As a** user, **I want to** use the {} screen **so that** I can complete my task without friction.\n\n",
            entry.title
        ));
        doc.push_str("**Acceptance criteria**\n\n");
        doc.push_str("- [ ] The screen loads in under two seconds\n");
        doc.push_str("- [ ] All interactive elements are keyboard accessible\n");
        if entry.depth > 0 {
            doc.push_str("- [ ] The user can navigate back to the parent screen\n");
        }
        doc.push('\n');
    }
    doc
}

fn api_docs(list: &ScreenList) -> String {
    let mut doc = String::from("# API Documentation\n\nAll endpoints return JSON.\n\n");
    for entry in outline(list).iter().filter(|e| e.depth == 0) {
        let slug = slug(&entry.title);
        let children: Vec<String> = list
            .children(&entry.item.id)
            .map(|child| slug_or_id(child))
            .collect();
        let body = json!({
            "screen": entry.title,
            "status": "ok",
            "data": { "items": [], "total": 0 },
            "links": children,
        });
        let body = serde_json::to_string_pretty(&body).unwrap_or_default();
        doc.push_str(&format!("## GET /api/{}\n\n", slug));
        doc.push_str(&format!("Returns the data shown on the {} screen.\n\n", entry.title));
        doc.push_str(&format!("```json\n{}\n```\n\n", body));
    }
    doc
}

fn database_schema() -> String {
    String::from(
        "# Database Schema\n\n\
```sql\n\
CREATE TABLE projects (\n    id UUID PRIMARY KEY,\n    name TEXT NOT NULL,\n    created_at TIMESTAMP NOT NULL DEFAULT now()\n);\n\n\
CREATE TABLE screens (\n    id UUID PRIMARY KEY,\n    project_id UUID NOT NULL REFERENCES projects(id),\n    parent_id UUID REFERENCES screens(id),\n    position INTEGER NOT NULL,\n    description TEXT NOT NULL DEFAULT '',\n    image_url TEXT NOT NULL\n);\n\n\
CREATE TABLE artifacts (\n    id UUID PRIMARY KEY,\n    project_id UUID NOT NULL REFERENCES projects(id),\n    kind TEXT NOT NULL,\n    body TEXT NOT NULL\n);\n\
```\n",
    )
}

fn prd(list: &ScreenList, notes: &ProjectNotes) -> String {
    let mut doc = String::from("# Product Requirements Document\n\n");
    doc.push_str("## Overview\n\n");
    doc.push_str(&format!(
        "The product consists of {} screen{}. This document summarises what each one is for.\n\n",
        list.len(),
        if list.len() == 1 { "" } else { "s" }
    ));
    doc.push_str("## Goals\n\n- Let users reach their goal in as few steps as possible\n- Keep navigation predictable\n\n");
    doc.push_str("## Screens\n\n");
    doc.push_str(&flow_outline(list));
    doc.push_str("\n## Backend logic\n\n");
    doc.push_str(&notes_or_placeholder(&notes.backend_logic));
    doc.push_str("\n## App flow\n\n");
    doc.push_str(&notes_or_placeholder(&notes.app_flow));
    doc
}

fn frd(list: &ScreenList, notes: &ProjectNotes) -> String {
    let mut doc = String::from("# Functional Requirements Document\n\n");
    doc.push_str("| ID | Requirement |\n|----|-------------|\n");
    let entries = outline(list);
    for (i, entry) in entries.iter().enumerate() {
        let requirement = match entry.item.parent_id.as_ref().and_then(|p| entries.iter().find(|e| &e.item.id == p)) {
            Some(parent) => format!("The system shall show {} from {}", entry.title, parent.title),
            None => format!("The system shall display the {} screen", entry.title),
        };
        doc.push_str(&format!("| FR-{:03} | {} |\n", i + 1, requirement.replace('|', "/")));
    }
    doc.push_str("\n## Constraints\n\n");
    doc.push_str(&notes_or_placeholder(&notes.backend_logic));
    doc
}

fn notes_or_placeholder(notes: &str) -> String {
    if notes.trim().is_empty() {
        "_No notes provided._\n".to_string()
    } else {
        format!("{}\n", notes.trim())
    }
}

fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

fn slug_or_id(item: &ScreenItem) -> String {
    item.title()
        .map(slug)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| item.id.to_string())
}

const DATA_URL_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'\n');

/// `data:` URL for downloading a generated document
pub fn download_href(markdown: &str) -> String {
    format!(
        "data:text/markdown;charset=utf-8,{}",
        utf8_percent_encode(markdown, DATA_URL_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScreenId;

    fn make_screen(id: &str, parent: Option<&str>, description: &str) -> ScreenItem {
        let mut item = ScreenItem::new(ScreenId::from(id), format!("blob:{}", id));
        item.parent_id = parent.map(ScreenId::from);
        item.description = description.to_string();
        item
    }

    fn sample() -> ScreenList {
        ScreenList::new(vec![
            make_screen("a", None, "Login\nEmail and password"),
            make_screen("b", None, ""),
            make_screen("c", Some("a"), "Forgot password"),
        ])
    }

    #[test]
    fn test_outline_labels() {
        let list = sample();
        let entries = outline(&list);
        let shape: Vec<_> = entries.iter().map(|e| (e.label.as_str(), e.title.as_str(), e.depth)).collect();
        assert_eq!(
            shape,
            vec![("1", "Login", 0), ("1.1", "Forgot password", 1), ("2", "Screen 2", 0)]
        );
    }

    #[test]
    fn test_flow_outline() {
        assert_eq!(
            flow_outline(&sample()),
            "- **1** Login\n  - **1.1** Forgot password\n- **2** Screen 2\n"
        );
        assert_eq!(flow_outline(&ScreenList::default()), "_No screens uploaded yet._\n");
    }

    #[test]
    fn test_screen_doc_mentions_parent_and_children() {
        let list = sample();
        let entries = outline(&list);
        let login = screen_doc(&list, &entries[0]);
        assert!(login.starts_with("## 1 Login\n"));
        assert!(login.contains("![Login](blob:a)"));
        assert!(login.contains("- Forgot password"));

        let forgot = screen_doc(&list, &entries[1]);
        assert!(forgot.contains("Reached from **Login**."));

        let blank = screen_doc(&list, &entries[2]);
        assert!(blank.contains("_No description yet._"));
    }

    #[test]
    fn test_screen_doc_html_in_description_stays_inert() {
        let list = ScreenList::new(vec![make_screen("a", None, "Home <img src=x onerror=alert(1)>\nWelcome")]);
        let entries = outline(&list);
        let html = crate::markdown::parse_markdown(&screen_doc(&list, &entries[0]));
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains(r#"<img class="doc-screenshot" src="blob:a""#));
    }

    #[test]
    fn test_user_stories_one_per_screen() {
        let doc = render(ArtifactKind::UserStories, &sample(), &ProjectNotes::default());
        assert!(doc.contains("## US-001: Login"));
        assert!(doc.contains("## US-002: Forgot password"));
        assert!(doc.contains("## US-003: Screen 2"));
        assert_eq!(doc.matches("navigate back to the parent").count(), 1);
    }

    #[test]
    fn test_api_docs_one_endpoint_per_root() {
        let doc = render(ArtifactKind::ApiDocs, &sample(), &ProjectNotes::default());
        assert!(doc.contains("## GET /api/login"));
        assert!(doc.contains("## GET /api/screen-2"));
        assert!(doc.contains("\"forgot-password\""));
        assert_eq!(doc.matches("## GET").count(), 2);
    }

    #[test]
    fn test_prd_and_frd_include_notes() {
        let notes = ProjectNotes {
            backend_logic: "Sessions expire after 30 minutes".to_string(),
            app_flow: String::new(),
        };
        let prd = render(ArtifactKind::Prd, &sample(), &notes);
        assert!(prd.contains("consists of 3 screens"));
        assert!(prd.contains("Sessions expire after 30 minutes"));
        assert!(prd.contains("_No notes provided._"));

        let frd = render(ArtifactKind::Frd, &sample(), &notes);
        assert!(frd.contains("| FR-002 | The system shall show Forgot password from Login |"));
    }

    #[test]
    fn test_schema_is_sql_block() {
        let doc = render(ArtifactKind::DatabaseSchema, &ScreenList::default(), &ProjectNotes::default());
        assert!(doc.contains("```sql\nCREATE TABLE projects"));
        assert!(doc.contains("parent_id UUID REFERENCES screens(id)"));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Sign Up / Step 2!"), "sign-up-step-2");
        assert_eq!(slug("  Home"), "home");
    }

    #[test]
    fn test_download_href_is_encoded() {
        let href = download_href("# Title\n50% done");
        assert_eq!(href, "data:text/markdown;charset=utf-8,%23%20Title%0A50%25%20done");
    }
}
