#![cfg(feature = "ssr")]

mod common;

use folio::db::post_repository::MongoPostRepository;
use folio::error::AppError;
use folio::migration::{run_migration, MigrationOptions};

#[tokio::test]
async fn migration_writes_every_record() {
    let env = common::TestEnv::start().await;

    let report = run_migration(
        Some(env.repo.as_ref()),
        common::sample_records(),
        &MigrationOptions::default(),
    )
    .await;

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);

    let post = env
        .repo
        .find_by_slug("async-rust-explained")
        .await
        .unwrap()
        .expect("migrated post should be stored under its slug");
    assert_eq!(post.title, "Async Rust, Explained!");
    assert_eq!(post.seo.keywords, vec!["rust", "async"]);
    assert_eq!(post.engagement.views, 0);
    assert!(post.published);
}

#[tokio::test]
async fn migration_rerun_duplicates_documents() {
    let env = common::TestEnv::start().await;
    let options = MigrationOptions::default();

    run_migration(Some(env.repo.as_ref()), common::sample_records(), &options).await;
    run_migration(Some(env.repo.as_ref()), common::sample_records(), &options).await;

    assert_eq!(env.count_slug("hello-world").await, 2);
    assert_eq!(env.count_slug("async-rust-explained").await, 2);
}

#[tokio::test]
async fn dry_run_leaves_collection_empty() {
    let env = common::TestEnv::start().await;
    let report = run_migration(None, common::sample_records(), &MigrationOptions::default()).await;

    assert_eq!(report.succeeded, 2);
    assert_eq!(env.count_slug("hello-world").await, 0);
}

#[tokio::test]
async fn published_posts_listed_newest_first() {
    let env = common::TestEnv::start().await;
    run_migration(
        Some(env.repo.as_ref()),
        common::sample_records(),
        &MigrationOptions::default(),
    )
    .await;

    let posts = env.repo.list_published().await.unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["async-rust-explained", "hello-world"]);
}

#[tokio::test]
async fn connect_fails_fast_when_server_is_unreachable() {
    let result =
        MongoPostRepository::connect("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300", "folio_test")
            .await;

    match result {
        Err(AppError::Database(msg)) => assert!(msg.contains("Failed to connect to MongoDB")),
        Err(other) => panic!("Expected Database error, got: {:?}", other),
        Ok(_) => panic!("Expected connection failure"),
    }
}

#[tokio::test]
async fn malformed_record_is_skipped_against_real_store() {
    let env = common::TestEnv::start().await;
    let mut entries = common::sample_records();
    entries.insert(1, serde_json::json!({ "title": "Broken", "readTime": "soon" }));

    let report = run_migration(Some(env.repo.as_ref()), entries, &MigrationOptions::default()).await;

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(env.count_slug("async-rust-explained").await, 1);
}
