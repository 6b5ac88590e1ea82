//! Login page with username/password sign-in.
//!
//! Successful authentication is not followed by an explicit navigation:
//! this route is public-only, so the guard redirects to the carried
//! destination (or the dashboard) as soon as the session flips.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::session::store::use_session;

/// Trimmed credentials, or the message shown when a field is missing.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_session();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(message) = store.login(&username_value, &password_value).await {
                error.set(message);
                busy.set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, username_value, password_value);
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h2>"Welcome Back"</h2>
                <p class="form-card__subtitle">"Sign in to continue your mental health journey"</p>

                <Show when=move || !error.get().is_empty()>
                    <p class="form-error" role="alert">{move || error.get()}</p>
                </Show>

                <form on:submit=on_submit>
                    <label class="form-field">
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="form-field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                            disabled=move || busy.get()
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="form-card__footer">
                    "Don't have an account? " <a href="/signup">"Sign up here"</a>
                </p>
            </div>
        </div>
    }
}
