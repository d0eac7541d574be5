use async_trait::async_trait;

use crate::db::models::Post;
use crate::error::AppError;

/// Repository trait for blog post operations.
///
/// This trait allows mocking the database layer in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. This is an unconditional create: inserting the
    /// same post twice stores two documents.
    async fn create(&self, post: Post) -> Result<(), AppError>;

    /// List published posts, newest first.
    async fn list_published(&self) -> Result<Vec<Post>, AppError>;

    /// Find a published post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;
}

/// MongoDB implementation of the PostRepository.
///
/// This is only available when the `ssr` feature is enabled (i.e., server-side).
#[cfg(feature = "ssr")]
pub struct MongoPostRepository {
    collection: mongodb::Collection<Post>,
}

#[cfg(feature = "ssr")]
impl MongoPostRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("posts"),
        }
    }

    /// Open `db_name` at `uri` and ping it.
    ///
    /// Building a client never touches the network, so without the ping an
    /// unreachable server would only show up on the first write.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, AppError> {
        use mongodb::bson::doc;

        let client = mongodb::Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        Ok(Self::new(&db))
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: Post) -> Result<(), AppError> {
        self.collection
            .insert_one(&post)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list_published(&self) -> Result<Vec<Post>, AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1, "slug": 1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "published": true })
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "slug": slug, "published": true })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
