use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as listed on the blog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub created_at: DateTime<Utc>,
}

/// A single blog post with its raw Markdown body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub summary: PostSummary,
    pub content: String,
    pub author: String,
}

impl PostSummary {
    /// Label shown next to the date, e.g. `5 min read`.
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time.max(1))
    }
}
