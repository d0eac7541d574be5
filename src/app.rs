use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::blog_list::BlogList;
use crate::components::contact_cta::ContactCta;
use crate::components::github_repos::GithubRepos;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::post_view::PostView;
use crate::components::profile_section::{get_site_profile, ProfileSection};

/// HTML document wrapper used for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <nav class="top-nav">
                <a class="logo" href="/">"Home"</a>
                <a href="/#projects">"Projects"</a>
                <a href="/blog">"Blog"</a>
                <a href="/#contact">"Contact"</a>
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/blog") view=BlogList/>
                    <Route path=path!("/blog/:slug") view=PostPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let profile = Resource::new(|| (), |_| async move { get_site_profile().await });

    view! {
        <Suspense fallback=|| view! { <LoadingIndicator message="Loading..."/> }>
            {move || profile.get().map(|res| match res {
                Ok(profile) => {
                    let email = profile.contact_email.clone();
                    view! {
                        <Title text=profile.name.clone()/>
                        <ProfileSection profile=profile/>
                        <GithubRepos/>
                        <ContactCta email=email/>
                    }.into_any()
                }
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <a class="back" href="/blog">"← All posts"</a>
        {move || view! { <PostView slug=slug()/> }}
    }
}
