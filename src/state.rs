use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::db::post_repository::PostRepository;
use crate::github::client::RepositorySource;
use crate::settings::SiteConfig;

/// Shared server state, available to axum handlers and (through context)
/// to Leptos server functions.
#[derive(Clone)]
pub struct AppState {
    pub post_repo: Arc<dyn PostRepository>,
    pub repo_source: Arc<dyn RepositorySource>,
    pub config: Arc<SiteConfig>,
    pub leptos_options: LeptosOptions,
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Fetch the `AppState` a server function runs with.
pub fn expect_state() -> Result<AppState, leptos::prelude::ServerFnError> {
    leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| leptos::prelude::ServerFnError::new("AppState not found in context"))
}
