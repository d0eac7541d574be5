use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::db::models::Post;
use crate::db::post_repository::PostRepository;
use crate::error::AppError;
use crate::migration::source::SourceRecord;
use crate::migration::transform::derive_post;

#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Stored as `author` on every migrated post.
    pub author: String,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            author: "Admin".to_string(),
        }
    }
}

/// A record that could not be decoded, derived or written.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    /// Position in the source collection.
    pub index: usize,
    pub title: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl MigrationReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn fail(&mut self, index: usize, title: String, error: &AppError) {
        tracing::error!("Record #{} '{}' failed: {}", index, title, error);
        self.failed += 1;
        self.failures.push(RecordFailure {
            index,
            title,
            error: error.to_string(),
        });
    }
}

fn entry_title(entry: &Value) -> String {
    entry
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("<untitled>")
        .to_string()
}

fn prepare(entry: Value, options: &MigrationOptions, migrated_at: DateTime<Utc>) -> Result<Post, AppError> {
    let record = SourceRecord::from_value(entry)?;
    let post = derive_post(record, &options.author, migrated_at);
    if post.slug.is_empty() {
        return Err(AppError::Parse(format!(
            "title '{}' has no letters or digits to build a slug from",
            post.title
        )));
    }
    Ok(post)
}

/// Migrate every source entry, strictly in order and one at a time.
///
/// Each entry is decoded, derived and written on its own: a failure at any
/// step is logged and counted, never retried, and never stops the loop.
/// With no store the run is a dry run and nothing is written.
pub async fn run_migration(
    store: Option<&dyn PostRepository>,
    entries: Vec<Value>,
    options: &MigrationOptions,
) -> MigrationReport {
    let migrated_at = Utc::now();
    let mut report = MigrationReport::default();

    tracing::info!("Migrating {} posts...", entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let title = entry_title(&entry);

        let post = match prepare(entry, options, migrated_at) {
            Ok(post) => post,
            Err(e) => {
                report.fail(index, title, &e);
                continue;
            }
        };
        let slug = post.slug.clone();

        let Some(store) = store else {
            tracing::info!("[dry-run] Would create '{}' ({})", title, slug);
            report.succeeded += 1;
            continue;
        };

        match store.create(post).await {
            Ok(()) => {
                tracing::info!("Created '{}' ({})", title, slug);
                report.succeeded += 1;
            }
            Err(e) => report.fail(index, title, &e),
        }
    }

    if report.failed == 0 {
        tracing::info!("Migration completed: {} succeeded, 0 failed.", report.succeeded);
    } else {
        tracing::warn!(
            "Migration completed: {} succeeded, {} failed.",
            report.succeeded,
            report.failed
        );
    }

    report
}
