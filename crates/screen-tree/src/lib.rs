//! Screen Tree
//!
//! Domain layer for uploaded screens:
//! - screen: entities and id generation
//! - list: the flat list with parent pointers (one level of nesting)
//! - controller: drag/drop reducer (reorder vs. nest)
//! - upload: turning picked files into screens
//!
//! No UI framework types appear here; the frontend feeds pointer samples in
//! and renders whatever list and notice come back out.

mod controller;
mod error;
mod list;
mod notice;
mod positioning;
mod screen;
mod upload;

pub use controller::{reduce, DragInput, DragState, DropOutcome, DropTarget, NestZone, PointerSample, Reduced};
pub use error::{DeleteRejected, MoveRejected};
pub use list::ScreenList;
pub use notice::{Notice, NoticeLevel};
pub use screen::{ScreenId, ScreenIdGen, ScreenItem};
pub use upload::{accept_uploads, UploadCandidate, UploadLimits, UploadReport};
