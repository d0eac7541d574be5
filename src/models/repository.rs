use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public GitHub repository, as returned by `GET /users/{user}/repos`.
///
/// Only the fields the showcase renders are kept; serde ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

/// View state of the repository showcase.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoFeed {
    Loading,
    Failed(String),
    Loaded(Vec<Repository>),
}

impl RepoFeed {
    /// Build the state from a finished fetch.
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<Repository>, E>) -> Self {
        match result {
            Ok(repos) => RepoFeed::Loaded(repos),
            Err(e) => RepoFeed::Failed(e.to_string()),
        }
    }

    /// Repositories to render as cards. Empty unless loaded.
    pub fn cards(&self) -> &[Repository] {
        match self {
            RepoFeed::Loaded(repos) => repos,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RepoFeed::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RepoFeed::Loading)
    }
}
