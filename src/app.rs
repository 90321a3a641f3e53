//! GravityDoc Frontend App
//!
//! Header, wizard navigation, the current step's page and the activity log.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivityLog, AppFlowPage, ArtifactsPage, BackendLogicPage, DescribePage, NoticeBar, ScreenDocsPage, UploadPage,
    WizardNav,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_step, AppState};
use crate::wizard::WizardStep;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Seed ids with the load time
    let store = Store::new(AppState::new(js_sys::Date::now() as u64));
    provide_context(AppContext::new(store, config));

    let page = move || match store_step(&store) {
        WizardStep::Upload => view! { <UploadPage /> }.into_any(),
        WizardStep::DescribeScreens => view! { <DescribePage /> }.into_any(),
        WizardStep::BackendLogic => view! { <BackendLogicPage /> }.into_any(),
        WizardStep::AppFlow => view! { <AppFlowPage /> }.into_any(),
        WizardStep::ScreenDocs => view! { <ScreenDocsPage /> }.into_any(),
        WizardStep::Artifacts => view! { <ArtifactsPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"GravityDoc"</h1>
                <p class="tagline">"Turn screenshots into product docs"</p>
            </header>
            <WizardNav />
            <NoticeBar />
            <main class="main-content">{page}</main>
            <ActivityLog />
        </div>
    }
}
