use chrono::{DateTime, Utc};

use crate::db::models::{Engagement, Post, SeoFields};
use crate::migration::slug::slugify;
use crate::migration::source::SourceRecord;

/// Derive the stored post from a source record.
///
/// `created_at` keeps the record's own timestamp; `updated_at` is the time
/// of the migration run.
pub fn derive_post(record: SourceRecord, author: &str, migrated_at: DateTime<Utc>) -> Post {
    let seo = SeoFields {
        meta_title: record.title.clone(),
        meta_description: record.excerpt.clone(),
        keywords: record.tags.clone(),
    };

    Post {
        id: None,
        slug: slugify(&record.title),
        title: record.title,
        excerpt: record.excerpt,
        content: record.content,
        category: record.category,
        tags: record.tags,
        read_time: record.read_time,
        author: author.to_string(),
        created_at: record.timestamp,
        updated_at: migrated_at,
        published: true,
        seo,
        engagement: Engagement::default(),
    }
}
