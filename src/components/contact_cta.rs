use leptos::prelude::*;

/// Closing call-to-action that opens the visitor's mail client.
#[component]
pub fn ContactCta(
    email: String,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    let message = message
        .unwrap_or_else(|| "Have a project in mind or just want to say hi? My inbox is open.".to_string());
    let href = format!("mailto:{email}");

    view! {
        <section id="contact" class="contact-cta">
            <h2>"Get in touch"</h2>
            <p>{message}</p>
            <a class="button" href=href>"Say hello"</a>
        </section>
    }
}
