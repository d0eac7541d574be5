use async_trait::async_trait;
use url::Url;

use crate::error::AppError;
use crate::models::repository::Repository;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Trait for listing a user's public repositories, enabling mock testing.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch at most `per_page` repositories, most recently updated first.
    async fn list_repositories(&self, user: &str, per_page: u8) -> Result<Vec<Repository>, AppError>;
}

/// Build `{api_base}/users/{user}/repos?sort=updated&per_page={n}`.
pub fn repos_url(api_base: &str, user: &str, per_page: u8) -> Result<Url, AppError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| AppError::Config(format!("Invalid GitHub API base '{}': {}", api_base, e)))?;

    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("GitHub API base '{}' cannot be a base", api_base)))?
        .pop_if_empty()
        .extend(["users", user, "repos"]);

    url.query_pairs_mut()
        .append_pair("sort", "updated")
        .append_pair("per_page", &per_page.to_string());

    Ok(url)
}

/// Keep the repositories worth showing: no forks, GitHub's order, at most `limit`.
pub fn showcase(repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repos.into_iter().filter(|r| !r.fork).take(limit).collect()
}

/// GitHub REST implementation of RepositorySource.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
}

#[cfg(feature = "ssr")]
impl GithubClient {
    pub fn new(api_base: impl Into<String>, timeout: std::time::Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            // GitHub rejects requests without a User-Agent.
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_repositories(&self, user: &str, per_page: u8) -> Result<Vec<Repository>, AppError> {
        let url = repos_url(&self.api_base, user, per_page)?;

        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("GitHub request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("GitHub user '{}'", user)));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(format!("GitHub returned HTTP {}", status)));
        }

        response
            .json::<Vec<Repository>>()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid GitHub response: {}", e)))
    }
}
