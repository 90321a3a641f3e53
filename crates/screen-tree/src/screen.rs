//! Screen Entity
//!
//! One uploaded screenshot with a user-editable description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque screen identifier, assigned once at upload time
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A screenshot in the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenItem {
    /// Unique identifier
    pub id: ScreenId,
    /// Object URL of the screenshot
    pub image: String,
    /// Free text written by the user
    pub description: String,
    /// Parent screen (None = root level)
    pub parent_id: Option<ScreenId>,
    /// Whether children are shown in the UI
    pub is_expanded: bool,
}

impl ScreenItem {
    /// Create a new root screen with an empty description
    pub fn new(id: ScreenId, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
            description: String::new(),
            parent_id: None,
            is_expanded: true,
        }
    }

    /// Check if this is a root screen (no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// First non-empty description line, if any
    pub fn title(&self) -> Option<&str> {
        self.description
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

/// Hands out `screen-<seed>-<n>` ids for one session
#[derive(Debug, Clone)]
pub struct ScreenIdGen {
    seed: u64,
    next: u64,
}

impl ScreenIdGen {
    pub fn new(seed: u64) -> Self {
        Self { seed, next: 0 }
    }

    pub fn next_id(&mut self) -> ScreenId {
        let id = ScreenId(format!("screen-{}-{}", self.seed, self.next));
        self.next += 1;
        id
    }
}
