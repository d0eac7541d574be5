use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::models::post::PostDetail;
use crate::rendering::markdown::render_markdown;

#[server]
pub async fn get_post(slug: String) -> Result<PostDetail, ServerFnError> {
    let state = crate::state::expect_state()?;
    crate::api::posts::get_post_detail(state.post_repo.as_ref(), &slug)
        .await
        .map_err(crate::ssr_utils::to_server_fn_error)
}

#[component]
pub fn PostView(slug: String) -> impl IntoView {
    let post = Resource::new(move || slug.clone(), |s| async move { get_post(s).await });

    view! {
        <Suspense fallback=|| view! { <LoadingIndicator message="Loading post..."/> }>
            {move || post.get().map(|res| match res {
                Ok(post) => {
                    let html = render_markdown(&post.content);
                    let date = post.summary.created_at.format("%B %-d, %Y").to_string();
                    view! {
                        <article class="post">
                            <h1>{post.summary.title.clone()}</h1>
                            <p class="post-meta">
                                {post.author} " · " {date} " · " {post.summary.read_time_label()}
                            </p>
                            <div class="post-body" inner_html=html></div>
                        </article>
                    }.into_any()
                }
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}
