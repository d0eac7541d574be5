use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::models::post::PostSummary;

#[server]
pub async fn list_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    let state = crate::state::expect_state()?;
    crate::api::posts::list_post_summaries(state.post_repo.as_ref())
        .await
        .map_err(crate::ssr_utils::to_server_fn_error)
}

#[component]
pub fn BlogList() -> impl IntoView {
    let posts = Resource::new(|| (), |_| async move { list_posts().await });

    view! {
        <section class="blog-list">
            <h1>"Blog"</h1>
            <Suspense fallback=|| view! { <LoadingIndicator message="Loading posts..."/> }>
                {move || posts.get().map(|res| match res {
                    Ok(posts) => view! {
                        <div class="post-grid">
                            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <p class="error">"Could not load posts: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn PostCard(post: PostSummary) -> impl IntoView {
    let read_time = post.read_time_label();
    let date = post.created_at.format("%B %-d, %Y").to_string();

    view! {
        <article class="post-card">
            <span class="category">{post.category}</span>
            <h2><a href=format!("/blog/{}", post.slug)>{post.title}</a></h2>
            <p class="excerpt">{post.excerpt}</p>
            <footer>
                <time>{date}</time>
                " · "
                <span>{read_time}</span>
            </footer>
            <ul class="tags">
                {post.tags.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
            </ul>
        </article>
    }
}
