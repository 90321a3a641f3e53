//! Frontend Models
//!
//! Screen types come from `screen-tree`; the rest is wizard-only state.

pub use screen_tree::{Notice, NoticeLevel, ScreenId, ScreenIdGen, ScreenItem, ScreenList};

use crate::artifacts::ArtifactKind;

/// Free-text notes from the backend logic and app flow steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectNotes {
    pub backend_logic: String,
    pub app_flow: String,
}

/// A generated (mocked) document
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub markdown: String,
}
