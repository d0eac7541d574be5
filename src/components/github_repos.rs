use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::models::repository::{RepoFeed, Repository};

/// GitHub caps `per_page` at 100.
#[cfg(feature = "ssr")]
const MAX_PER_PAGE: u8 = 100;

#[server]
pub async fn get_repositories() -> Result<Vec<Repository>, ServerFnError> {
    use crate::github::client::showcase;

    let state = crate::state::expect_state()?;
    let count = state.config.github.repo_count;
    // Over-fetch so dropping forks still leaves enough to show.
    let per_page = count.saturating_mul(2).min(MAX_PER_PAGE);

    let repos = state
        .repo_source
        .list_repositories(&state.config.profile.github_user, per_page)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to fetch GitHub repositories: {e}");
            crate::ssr_utils::to_server_fn_error(e)
        })?;

    Ok(showcase(repos, count as usize))
}

#[component]
pub fn GithubRepos() -> impl IntoView {
    let repos = Resource::new(|| (), |_| async move { get_repositories().await });

    view! {
        <section id="projects" class="github-repos">
            <h2>"Open source"</h2>
            <Suspense fallback=|| view! { <LoadingIndicator message="Loading repositories..."/> }>
                {move || repos.get().map(|res| view! { <RepoGrid feed=RepoFeed::from_result(res)/> })}
            </Suspense>
        </section>
    }
}

/// Renders one of the three fetch states.
#[component]
pub fn RepoGrid(feed: RepoFeed) -> impl IntoView {
    if feed.is_loading() {
        return view! { <LoadingIndicator message="Loading repositories..."/> }.into_any();
    }
    if let Some(err) = feed.error() {
        let err = err.to_string();
        return view! { <p class="error">"Could not load repositories: " {err}</p> }.into_any();
    }

    let cards = feed.cards().to_vec();
    view! {
        <div class="repo-grid">
            {cards.into_iter().map(|repo| view! { <RepoCard repo=repo/> }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn RepoCard(repo: Repository) -> impl IntoView {
    let updated = repo.updated_at.format("%b %Y").to_string();

    view! {
        <article class="repo-card">
            <h3>
                <a href=repo.html_url target="_blank" rel="noopener noreferrer">{repo.name}</a>
            </h3>
            {repo.description.map(|d| view! { <p class="description">{d}</p> })}
            <footer class="repo-meta">
                {repo.language.map(|l| view! { <span class="language">{l}</span> })}
                <span class="stars" title="Stars">"★ " {repo.stargazers_count}</span>
                <span class="forks" title="Forks">"⑂ " {repo.forks_count}</span>
                <span class="updated">"Updated " {updated}</span>
            </footer>
        </article>
    }
}
