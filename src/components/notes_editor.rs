//! Notes Editor Component
//!
//! Textarea bound to one field of the project notes.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ProjectNotes;
use crate::store::{store_notes, store_update_notes};

/// Which notes field the editor writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesField {
    BackendLogic,
    AppFlow,
}

impl NotesField {
    fn read(self, notes: &ProjectNotes) -> &str {
        match self {
            NotesField::BackendLogic => &notes.backend_logic,
            NotesField::AppFlow => &notes.app_flow,
        }
    }

    fn write(self, notes: &mut ProjectNotes, value: String) {
        match self {
            NotesField::BackendLogic => notes.backend_logic = value,
            NotesField::AppFlow => notes.app_flow = value,
        }
    }
}

#[component]
pub fn NotesEditor(
    field: NotesField,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let store = use_app_context().store;
    // Read once; the textarea owns its value while typing
    let initial = field.read(&store_notes(&store)).to_string();

    view! {
        <textarea
            class="notes-input"
            rows="12"
            placeholder=placeholder
            prop:value=initial
            on:input=move |ev| {
                let value = event_target_value(&ev);
                store_update_notes(&store, |notes| field.write(notes, value));
            }
        />
    }
}
