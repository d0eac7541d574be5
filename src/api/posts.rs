use crate::db::post_repository::PostRepository;
use crate::error::AppError;
use crate::models::post::{PostDetail, PostSummary};

/// Published posts for the blog index, newest first.
pub async fn list_post_summaries(repo: &dyn PostRepository) -> Result<Vec<PostSummary>, AppError> {
    Ok(repo
        .list_published()
        .await?
        .iter()
        .map(|post| post.summary())
        .collect())
}

pub async fn get_post_detail(repo: &dyn PostRepository, slug: &str) -> Result<PostDetail, AppError> {
    repo.find_by_slug(slug)
        .await?
        .map(|post| post.into_detail())
        .ok_or_else(|| AppError::NotFound(format!("Post '{}'", slug)))
}

/// Axum handler for `GET /api/v1/posts`.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub async fn list_posts_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> Result<axum::Json<Vec<PostSummary>>, AppError> {
    let posts = list_post_summaries(state.post_repo.as_ref()).await?;
    Ok(axum::Json(posts))
}

/// Axum handler for `GET /api/v1/posts/{slug}`.
#[cfg(feature = "ssr")]
pub async fn get_post_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(slug): axum::extract::Path<String>,
) -> Result<axum::Json<PostDetail>, AppError> {
    let post = get_post_detail(state.post_repo.as_ref(), &slug).await?;
    Ok(axum::Json(post))
}
