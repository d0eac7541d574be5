use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

use folio::db::post_repository::{MongoPostRepository, PostRepository};
use folio::error::AppError;
use folio::github::client::RepositorySource;
use folio::migration::source::parse_source;
use folio::models::repository::Repository;
use folio::settings::SiteConfig;
use folio::state::AppState;

/// GitHub stand-in; the API tests never reach it.
pub struct NoRepos;

#[async_trait]
impl RepositorySource for NoRepos {
    async fn list_repositories(&self, _user: &str, _per_page: u8) -> Result<Vec<Repository>, AppError> {
        Ok(vec![])
    }
}

/// Holds a running MongoDB container and the repository wired to it.
///
/// The container is stopped and cleaned up when this struct is dropped.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub db: mongodb::Database,
    pub repo: Arc<dyn PostRepository>,
}

impl TestEnv {
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let db = mongo_client.database("folio_test");
        let repo: Arc<dyn PostRepository> = Arc::new(
            MongoPostRepository::connect(&mongo_uri, "folio_test")
                .await
                .expect("Failed to ping MongoDB"),
        );

        Self {
            _mongo: mongo_container,
            db,
            repo,
        }
    }

    /// Build an `axum_test::TestServer` exposing the JSON API.
    pub fn server(&self) -> axum_test::TestServer {
        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("folio")
            .build();

        let app_state = AppState {
            post_repo: self.repo.clone(),
            repo_source: Arc::new(NoRepos),
            config: Arc::new(SiteConfig::default()),
            leptos_options,
        };

        let router = Router::new()
            .route("/api/v1/posts", get(folio::api::posts::list_posts_handler))
            .route("/api/v1/posts/{slug}", get(folio::api::posts::get_post_handler))
            .with_state(app_state);

        axum_test::TestServer::builder()
            .try_build(router)
            .expect("Failed to build TestServer")
    }

    /// Number of stored documents with the given slug.
    pub async fn count_slug(&self, slug: &str) -> u64 {
        self.db
            .collection::<mongodb::bson::Document>("posts")
            .count_documents(mongodb::bson::doc! { "slug": slug })
            .await
            .expect("Failed to count documents")
    }
}

pub fn sample_records() -> Vec<serde_json::Value> {
    parse_source(
        r###"[
        {
            "title": "Hello World",
            "excerpt": "The first post.",
            "content": "# Hello\n\nWelcome to the blog.",
            "category": "general",
            "tags": ["intro"],
            "readTime": 2,
            "timestamp": "2024-01-10"
        },
        {
            "title": "Async Rust, Explained!",
            "excerpt": "Futures without tears.",
            "content": "Futures are **lazy**.",
            "category": "engineering",
            "tags": ["rust", "async"],
            "readTime": 9,
            "timestamp": "2024-03-02T08:00:00Z"
        }
    ]"###,
    )
    .expect("sample records are valid")
}
