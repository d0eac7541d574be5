pub mod app;
pub mod error;
pub mod models {
    pub mod post;
    pub mod profile;
    pub mod repository;
}
pub mod components {
    pub mod blog_list;
    pub mod contact_cta;
    pub mod github_repos;
    pub mod loading_indicator;
    pub mod post_view;
    pub mod profile_section;
    pub mod social_links;
}
pub mod rendering {
    pub mod markdown;
}
pub mod db {
    pub mod models;
    pub mod post_repository;
}
pub mod github {
    pub mod client;
}
pub mod migration;
pub mod api {
    pub mod errors;
    pub mod posts;
}

#[cfg(feature = "ssr")]
pub mod settings;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "ssr")]
pub mod ssr_utils {
    use leptos::prelude::ServerFnError;

    use crate::error::AppError;

    /// Flatten an `AppError` into the string-only error server functions carry.
    pub fn to_server_fn_error(e: AppError) -> ServerFnError {
        ServerFnError::new(e.to_string())
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
