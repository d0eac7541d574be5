use leptos::prelude::*;

/// Placeholder shown while a component's fetch is in flight.
#[component]
pub fn LoadingIndicator(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>{message}</span>
        </div>
    }
}
