//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All field access goes through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use screen_tree::{reduce, DragInput, DragState, NestZone, Reduced, UploadCandidate, UploadLimits, UploadReport};

use crate::artifacts::ArtifactKind;
use crate::models::{Artifact, Notice, ProjectNotes, ScreenIdGen, ScreenList};
use crate::wizard::WizardStep;

/// Notices kept on screen at once
const MAX_NOTICES: usize = 3;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Uploaded screens, in flat order
    pub screens: ScreenList,
    /// Id source for new screens
    pub ids: ScreenIdGen,
    /// Current wizard step
    pub step: WizardStep,
    /// Backend logic and app flow notes
    pub notes: ProjectNotes,
    /// Most recent notices, oldest first
    pub notices: Vec<Notice>,
    /// Generated artifacts
    pub artifacts: Vec<Artifact>,
}

impl AppState {
    pub fn new(id_seed: u64) -> Self {
        Self {
            screens: ScreenList::default(),
            ids: ScreenIdGen::new(id_seed),
            step: WizardStep::default(),
            notes: ProjectNotes::default(),
            notices: Vec::new(),
            artifacts: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Screens
// ========================

pub fn store_screens(store: &AppStore) -> ScreenList {
    store.screens().get()
}

pub fn store_screens_untracked(store: &AppStore) -> ScreenList {
    store.screens().get_untracked()
}

pub fn store_screen_count(store: &AppStore) -> usize {
    store.screens().with(|screens| screens.len())
}

pub fn store_set_screens(store: &AppStore, screens: ScreenList) {
    *store.screens().write() = screens;
}

/// Mutate the screen list in place and return whatever the closure returns
pub fn store_update_screens<R>(store: &AppStore, f: impl FnOnce(&mut ScreenList) -> R) -> R {
    let binding = store.screens();
    let mut screens = binding.write();
    f(&mut screens)
}

/// Feed one drag event through the reducer, applying any list change
pub fn store_reduce_drag(store: &AppStore, state: &DragState, input: DragInput, zone: &NestZone) -> Reduced {
    let mut reduced = store
        .screens()
        .with_untracked(|screens| reduce(screens, state, input, zone));
    if let Some(screens) = reduced.list.take() {
        store_set_screens(store, screens);
    }
    reduced
}

pub fn store_accept_uploads(store: &AppStore, candidates: Vec<UploadCandidate>, limits: &UploadLimits) -> UploadReport {
    // Never hold two field guards at once; they share one lock
    let mut ids = store.ids().get_untracked();
    let report = store_update_screens(store, |screens| {
        screen_tree::accept_uploads(screens, candidates, limits, &mut ids)
    });
    *store.ids().write() = ids;
    report
}

// ========================
// Wizard
// ========================

pub fn store_step(store: &AppStore) -> WizardStep {
    store.step().get()
}

pub fn store_set_step(store: &AppStore, step: WizardStep) {
    *store.step().write() = step;
}

pub fn store_notes(store: &AppStore) -> ProjectNotes {
    store.notes().get()
}

pub fn store_notes_untracked(store: &AppStore) -> ProjectNotes {
    store.notes().get_untracked()
}

pub fn store_update_notes(store: &AppStore, f: impl FnOnce(&mut ProjectNotes)) {
    f(&mut store.notes().write());
}

// ========================
// Notices
// ========================

pub fn store_notices(store: &AppStore) -> Vec<Notice> {
    store.notices().get()
}

pub fn store_push_notice(store: &AppStore, notice: Notice) {
    let binding = store.notices();
    let mut notices = binding.write();
    notices.push(notice);
    let overflow = notices.len().saturating_sub(MAX_NOTICES);
    notices.drain(..overflow);
}

pub fn store_dismiss_notice(store: &AppStore, index: usize) {
    let binding = store.notices();
    let mut notices = binding.write();
    if index < notices.len() {
        notices.remove(index);
    }
}

// ========================
// Artifacts
// ========================

pub fn store_artifact(store: &AppStore, kind: ArtifactKind) -> Option<Artifact> {
    store
        .artifacts()
        .with(|artifacts| artifacts.iter().find(|a| a.kind == kind).cloned())
}

/// Insert or replace the artifact of the same kind
pub fn store_set_artifact(store: &AppStore, artifact: Artifact) {
    let binding = store.artifacts();
    let mut artifacts = binding.write();
    match artifacts.iter_mut().find(|a| a.kind == artifact.kind) {
        Some(existing) => *existing = artifact,
        None => artifacts.push(artifact),
    }
}
