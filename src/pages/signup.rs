//! Signup page with per-field validation.
//!
//! The confirmation password never leaves the page; the posted form carries
//! only the account fields. As with login, the public-only guard performs
//! the post-signup navigation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupForm;
use crate::session::store::use_session;
use crate::util::validate::{SignupErrors, validate_signup};

/// Build the posted form from trimmed field values. Run only after
/// validation passed.
fn signup_form(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> SignupForm {
    SignupForm {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        password: password.to_owned(),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = use_session();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(SignupErrors::default());
    let general_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let errors = validate_signup(
            &username.get(),
            &email.get(),
            &first_name.get(),
            &last_name.get(),
            &password.get(),
            &confirm_password.get(),
        );
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(SignupErrors::default());
        general_error.set(String::new());
        busy.set(true);

        let form = signup_form(
            &username.get(),
            &email.get(),
            &first_name.get(),
            &last_name.get(),
            &password.get(),
        );
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(message) = store.signup(form).await {
                general_error.set(message);
                busy.set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, form);
        }
    };

    let field = move |label: &'static str,
                      input_type: &'static str,
                      placeholder: &'static str,
                      value: RwSignal<String>,
                      error: Signal<Option<&'static str>>| {
        view! {
            <label class="form-field">
                {label}
                <input
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
                <Show when=move || error.get().is_some()>
                    <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
                </Show>
            </label>
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h2>"Join MindMate"</h2>
                <p class="form-card__subtitle">"Start your mental health journey today"</p>

                <Show when=move || !general_error.get().is_empty()>
                    <p class="form-error" role="alert">{move || general_error.get()}</p>
                </Show>

                <form on:submit=on_submit>
                    {field(
                        "First Name",
                        "text",
                        "Enter your first name",
                        first_name,
                        Signal::derive(move || field_errors.get().first_name),
                    )}
                    {field(
                        "Last Name",
                        "text",
                        "Enter your last name",
                        last_name,
                        Signal::derive(move || field_errors.get().last_name),
                    )}
                    {field(
                        "Username",
                        "text",
                        "Choose a username",
                        username,
                        Signal::derive(move || field_errors.get().username),
                    )}
                    {field(
                        "Email Address",
                        "email",
                        "Enter your email address",
                        email,
                        Signal::derive(move || field_errors.get().email),
                    )}
                    {field(
                        "Password",
                        "password",
                        "Create a password",
                        password,
                        Signal::derive(move || field_errors.get().password),
                    )}
                    {field(
                        "Confirm Password",
                        "password",
                        "Confirm your password",
                        confirm_password,
                        Signal::derive(move || field_errors.get().confirm_password),
                    )}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="form-card__footer">
                    "Already have an account? " <a href="/login">"Sign in here"</a>
                </p>
            </div>
        </div>
    }
}
