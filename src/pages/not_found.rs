//! Catch-all screen for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Back Home"
            </a>
        </div>
    }
}
