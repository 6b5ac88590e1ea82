//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session store for identity-dependent rendering; logout is the
//! one session mutation it triggers, then it navigates home.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::store::use_session;

/// Class for a nav link, highlighting the current route.
fn link_class(current_path: &str, link_path: &str) -> &'static str {
    if current_path == link_path { "nav__link nav__link--active" } else { "nav__link" }
}

/// Nav display precedence: first name, then username.
fn nav_display_name(first_name: &str, username: &str) -> String {
    if first_name.is_empty() { username.to_owned() } else { first_name.to_owned() }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("/dashboard", "Dashboard"),
    ("/track-mood", "Track Mood"),
    ("/history", "History"),
    ("/journals", "Journals"),
    ("/achievements", "Achievements"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        store.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">
                "MindMate"
            </a>

            <Show when=move || store.is_authenticated()>
                <ul class="nav__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <li>
                                    <a
                                        href=path
                                        class=move || link_class(&pathname.get(), path)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>

            <div class="nav__account">
                <Show
                    when=move || store.is_authenticated()
                    fallback=move || {
                        view! {
                            <a href="/login" class=move || link_class(&pathname.get(), "/login")>
                                "Login"
                            </a>
                            <a href="/signup" class=move || link_class(&pathname.get(), "/signup")>
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <span class="nav__user">
                        {move || {
                            store
                                .account()
                                .map(|a| nav_display_name(&a.first_name, &a.username))
                                .unwrap_or_default()
                        }}
                    </span>
                    <a href="/profile" class="nav__link">
                        "Profile"
                    </a>
                    <button class="nav__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
