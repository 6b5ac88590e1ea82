//! Loading placeholder shown while data or the session is in flight.

use leptos::prelude::*;

/// Spinner with a caption; `full_screen` centers it over the viewport, which
/// is how the route guard holds the screen while the session settles.
#[component]
pub fn Loading(
    #[prop(optional)] full_screen: bool,
    #[prop(into, default = "Loading...".to_owned())] text: String,
) -> impl IntoView {
    let class = if full_screen { "loading loading--full-screen" } else { "loading" };
    view! {
        <div class=class role="status">
            <div class="loading__spinner" aria-hidden="true"></div>
            <p class="loading__text">{text}</p>
        </div>
    }
}
