//! User-facing notices

use serde::{Deserialize, Serialize};

use crate::error::{DeleteRejected, MoveRejected};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Rejected,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Rejected => "rejected",
        }
    }
}

/// One line of feedback for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Rejected, message: message.into() }
    }

    pub fn is_rejection(&self) -> bool {
        self.level == NoticeLevel::Rejected
    }
}

impl From<MoveRejected> for Notice {
    fn from(err: MoveRejected) -> Self {
        Notice::rejected(err.to_string())
    }
}

impl From<DeleteRejected> for Notice {
    fn from(err: DeleteRejected) -> Self {
        Notice::rejected(err.to_string())
    }
}
