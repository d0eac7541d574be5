//! Copies the static blog-post JSON collection into MongoDB.
//!
//! ```bash
//! migrate-posts --env-file .env --source data/blog_posts.json
//! ```
//!
//! Exits 0 once every record has been attempted, even if some failed, and 1
//! when the run cannot start (bad env file, unreadable source, no database).
//! `--dry-run` validates every record without needing a database.
//! Posts are created unconditionally: running twice stores every post twice.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use folio::db::post_repository::{MongoPostRepository, PostRepository};
use folio::migration::env_file::EnvFile;
use folio::migration::{self, MigrationReport};

#[derive(Debug, Parser)]
#[command(name = "migrate-posts", about = "Copy static blog posts into the document database")]
struct Args {
    /// `KEY=VALUE` file with the database settings.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// JSON array of blog posts.
    #[arg(long, default_value = "data/blog_posts.json")]
    source: PathBuf,

    /// Log the derived posts without writing them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,migrate_posts=info".into()),
        )
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            tracing::info!(
                "Summary: {} succeeded, {} failed ({} total)",
                report.succeeded,
                report.failed,
                report.total()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Migration aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<MigrationReport> {
    let env = EnvFile::load(&args.env_file)?;

    let report = migration::execute(&env, &args.source, args.dry_run, |uri, db_name| async move {
        let repo = MongoPostRepository::connect(&uri, &db_name).await?;
        tracing::info!("Connected to MongoDB database '{}'", db_name);
        Ok(Arc::new(repo) as Arc<dyn PostRepository>)
    })
    .await?;

    Ok(report)
}
