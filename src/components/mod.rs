//! UI Components
//!
//! Leptos components for the wizard.

mod activity_log;
mod delete_confirm_button;
mod markdown_view;
mod notes_editor;
mod notice_bar;
mod pages;
mod screen_row;
mod screens_list;
mod upload_zone;
mod wizard_nav;

pub use activity_log::ActivityLog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use markdown_view::MarkdownView;
pub use notes_editor::{NotesEditor, NotesField};
pub use notice_bar::NoticeBar;
pub use pages::{AppFlowPage, ArtifactsPage, BackendLogicPage, DescribePage, ScreenDocsPage, UploadPage};
pub use screen_row::ScreenRow;
pub use screens_list::ScreensList;
pub use upload_zone::UploadZone;
pub use wizard_nav::WizardNav;
