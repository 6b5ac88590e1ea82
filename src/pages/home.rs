//! Public landing page.

use leptos::prelude::*;

use crate::session::store::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_session();

    view! {
        <div class="home-page">
            <h1>"Your mind matters."</h1>
            <p class="home-page__lead">
                "Track your moods, keep a journal, and watch your mental health patterns
                emerge over time."
            </p>
            <div class="home-page__actions">
                <Show
                    when=move || store.is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/signup" class="btn btn--primary">
                                "Get Started"
                            </a>
                            <a href="/login" class="btn">
                                "Sign In"
                            </a>
                        }
                    }
                >
                    <a href="/dashboard" class="btn btn--primary">
                        "Go to Dashboard"
                    </a>
                </Show>
            </div>
        </div>
    }
}
