//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::{Notice, NoticeLevel};
use crate::store::{store_push_notice, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Global state store
    pub store: AppStore,
    /// Loaded configuration
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Show a notice to the user and record it in the log
    pub fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Rejected => log::warn!("[NOTICE] {}", notice.message),
            _ => log::info!("[NOTICE] {}", notice.message),
        }
        store_push_notice(&self.store, notice);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
