use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::post::{PostDetail, PostSummary};

/// A blog post stored in the MongoDB `posts` collection.
///
/// Written once by the migration tool; the site only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// MongoDB generates this on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// URL-safe identifier derived from the title.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw Markdown body.
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published: bool,
    pub seo: SeoFields,
    #[serde(default)]
    pub engagement: Engagement,
}

/// Search-engine metadata, denormalized from the post itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoFields {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            read_time: self.read_time,
            created_at: self.created_at,
        }
    }

    pub fn into_detail(self) -> PostDetail {
        let summary = self.summary();
        PostDetail {
            summary,
            content: self.content,
            author: self.author,
        }
    }
}
