#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=info".into()),
        )
        .init();

    match serve().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use axum::routing::get;
    use axum::Router;
    use folio::api;
    use folio::app::{shell, App};
    use folio::db::post_repository::{MongoPostRepository, PostRepository};
    use folio::github::client::{GithubClient, RepositorySource};
    use folio::settings::SiteConfig;
    use folio::state::AppState;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    tracing::info!("Starting portfolio server...");

    let config = SiteConfig::load().context("Failed to load configuration")?;

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    // Connect to MongoDB
    let post_repo: Arc<dyn PostRepository> = Arc::new(
        MongoPostRepository::connect(&config.database.uri, &config.database.name).await?,
    );

    tracing::info!("Connected to MongoDB database '{}'", config.database.name);

    let repo_source: Arc<dyn RepositorySource> = Arc::new(
        GithubClient::new(config.github.api_base.clone(), config.github.timeout())
            .context("Failed to initialize GitHub client")?,
    );

    let app_state = AppState {
        post_repo,
        repo_source,
        config: Arc::new(config),
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = Router::new()
        // API routes
        .route("/api/v1/posts", get(api::posts::list_posts_handler))
        .route("/api/v1/posts/{slug}", get(api::posts::get_post_handler))
        // Leptos SSR routes and server functions
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static files (images, compiled CSS/WASM)
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
