use leptos::prelude::*;

use crate::components::social_links::SocialLinks;
use crate::models::profile::SiteProfile;

#[server]
pub async fn get_site_profile() -> Result<SiteProfile, ServerFnError> {
    let state = crate::state::expect_state()?;
    Ok(state.config.profile.clone())
}

/// Hero block: avatar, name, headline, bio and the social links.
#[component]
pub fn ProfileSection(profile: SiteProfile) -> impl IntoView {
    let SiteProfile {
        name,
        headline,
        bio,
        avatar,
        location,
        socials,
        ..
    } = profile;

    view! {
        <section id="about" class="profile-section">
            <img class="avatar" src=avatar alt=name.clone() width="160" height="160"/>
            <div class="profile-text">
                <h1>{name}</h1>
                <p class="headline">{headline}</p>
                {location.map(|loc| view! { <p class="location">{loc}</p> })}
                <p class="bio">{bio}</p>
                <SocialLinks links=socials/>
            </div>
        </section>
    }
}
