//! Upload Intake
//!
//! Turns picked or dropped files into root-level screens.

use serde::{Deserialize, Serialize};

use crate::list::ScreenList;
use crate::notice::Notice;
use crate::screen::{ScreenIdGen, ScreenItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLimits {
    /// Maximum number of screens in the list
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// MIME prefix a file must carry to be accepted
    #[serde(default = "default_mime_prefix")]
    pub accepted_mime_prefix: String,
}

fn default_max_files() -> usize {
    20
}

fn default_mime_prefix() -> String {
    "image/".to_string()
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            accepted_mime_prefix: default_mime_prefix(),
        }
    }
}

/// A file as the browser handed it over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime: String,
    /// Object URL the screenshot can be displayed from
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub accepted: usize,
    /// Files that were not images
    pub skipped: Vec<String>,
    /// Images dropped because the list was full
    pub over_limit: Vec<String>,
}

impl UploadReport {
    pub fn notice(&self, limits: &UploadLimits) -> Notice {
        let mut parts = Vec::new();
        if self.accepted > 0 {
            parts.push(format!("Added {} screen{}", self.accepted, plural(self.accepted)));
        }
        if !self.skipped.is_empty() {
            parts.push(format!("skipped {} non-image file{}", self.skipped.len(), plural(self.skipped.len())));
        }
        if !self.over_limit.is_empty() {
            parts.push(format!(
                "{} file{} over the {} screen limit",
                self.over_limit.len(),
                plural(self.over_limit.len()),
                limits.max_files
            ));
        }
        if parts.is_empty() {
            return Notice::info("No files selected");
        }
        let message = parts.join(", ");
        if self.skipped.is_empty() && self.over_limit.is_empty() {
            Notice::success(message)
        } else {
            Notice::rejected(message)
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Append one new screen per accepted file
pub fn accept_uploads(
    list: &mut ScreenList,
    candidates: Vec<UploadCandidate>,
    limits: &UploadLimits,
    ids: &mut ScreenIdGen,
) -> UploadReport {
    let mut report = UploadReport::default();
    for candidate in candidates {
        if !candidate.mime.starts_with(&limits.accepted_mime_prefix) {
            report.skipped.push(candidate.name);
            continue;
        }
        if list.len() >= limits.max_files {
            report.over_limit.push(candidate.name);
            continue;
        }
        list.push(ScreenItem::new(ids.next_id(), candidate.url));
        report.accepted += 1;
    }
    tracing::debug!(
        accepted = report.accepted,
        skipped = report.skipped.len(),
        over_limit = report.over_limit.len(),
        "upload processed"
    );
    report
}
