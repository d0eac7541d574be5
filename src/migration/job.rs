use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use crate::db::post_repository::PostRepository;
use crate::error::AppError;
use crate::migration::env_file::EnvFile;
use crate::migration::runner::{run_migration, MigrationOptions, MigrationReport};
use crate::migration::source::load_source;

/// One full run of the migration tool.
///
/// Returns `Err` only when the run cannot start: unreadable or non-array
/// source, missing `MONGODB_URI`, or `connect` failing. Once the loop has
/// started, the outcome is always `Ok`, however many records failed.
///
/// `connect` receives the URI and database name and is never called on a
/// dry run.
pub async fn execute<F, Fut>(
    env: &EnvFile,
    source: &Path,
    dry_run: bool,
    connect: F,
) -> Result<MigrationReport, AppError>
where
    F: FnOnce(String, String) -> Fut,
    Fut: Future<Output = Result<Arc<dyn PostRepository>, AppError>>,
{
    let entries = load_source(source)?;
    tracing::info!("Loaded {} posts from {}", entries.len(), source.display());

    let options = MigrationOptions {
        author: env.get_or("POSTS_AUTHOR", "Admin"),
    };

    if dry_run {
        return Ok(run_migration(None, entries, &options).await);
    }

    let uri = env.require("MONGODB_URI")?;
    let db_name = env.get_or("MONGODB_DATABASE", "portfolio");
    let store = connect(uri, db_name).await?;

    Ok(run_migration(Some(store.as_ref()), entries, &options).await)
}
