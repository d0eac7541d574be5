use leptos::prelude::*;

use crate::models::profile::SocialLink;

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <ul class="social-links">
            {links
                .into_iter()
                .map(|link| {
                    let external = link.is_external();
                    let aria_label = link.label.clone();
                    let label = link.label;
                    view! {
                        <li>
                            <a
                                href=link.url
                                target=if external { "_blank" } else { "_self" }
                                rel=if external { "noopener noreferrer" } else { "" }
                                aria-label=aria_label
                            >
                                <i class=link.kind.icon_class() aria-hidden="true"></i>
                                <span>{label}</span>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
