//! Rejections
//!
//! The `Display` text of each variant is what the user sees.

use thiserror::Error;

use crate::screen::ScreenId;

/// A drop that was computed as legal but refused when applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("Screens with nested screens cannot be nested")]
    HasNestedScreens { id: ScreenId },
}

/// A delete that would leave the list inconsistent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteRejected {
    #[error("This screen has nested screens. Delete or move those first.")]
    HasNestedScreens { id: ScreenId, children: usize },
    #[error("Screen not found")]
    NotFound { id: ScreenId },
}
