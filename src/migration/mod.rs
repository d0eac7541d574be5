//! One-off copy of the static blog-post collection into the `posts` collection.
//!
//! The flow is linear: read the env file, read the JSON array of source
//! records, then decode each record, derive one
//! [`Post`](crate::db::models::Post) from it and create it in the store, one
//! record at a time. A record that fails at any step is logged and counted;
//! it never stops the rest of the run.
//!
//! Creates are unconditional, so running the migration twice against the
//! same source duplicates every post.

pub mod env_file;
pub mod job;
pub mod runner;
pub mod slug;
pub mod source;
pub mod transform;

pub use job::execute;
pub use runner::{run_migration, MigrationOptions, MigrationReport, RecordFailure};
pub use slug::slugify;
pub use source::SourceRecord;
