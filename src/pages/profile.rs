//! Profile page: edit account fields, change password, lifetime stats.
//!
//! The PATCH response is merged back into the session with an explicit
//! field patch so the navbar and greetings update without a refetch.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{Account, AccountUpdate, Listing};
use crate::session::store::use_session;
use crate::util::date::format_date;
use crate::util::validate::valid_email;

/// Check the always-required profile fields before the round trip.
fn validate_profile_input(username: &str, email: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Username is required");
    }
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !valid_email(email.trim()) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Check the change-password form.
fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Current password is required");
    }
    if new.is_empty() {
        return Err("New password is required");
    }
    if new.len() < 8 {
        return Err("New password must be at least 8 characters long");
    }
    if new != confirm {
        return Err("New passwords do not match");
    }
    Ok(())
}

/// Patch carrying the five editable fields of a PATCH response, for the
/// local session merge.
#[cfg(any(test, feature = "csr"))]
fn merge_patch(account: &Account) -> AccountUpdate {
    AccountUpdate {
        username: Some(account.username.clone()),
        email: Some(account.email.clone()),
        first_name: Some(account.first_name.clone()),
        last_name: Some(account.last_name.clone()),
        bio: Some(account.bio.clone()),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_session();
    let http = store.http();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());

    // Seed the form from the cached account, and reseed after merges.
    Effect::new(move || {
        if let Some(account) = store.account() {
            username.set(account.username);
            email.set(account.email);
            first_name.set(account.first_name);
            last_name.set(account.last_name);
            bio.set(account.bio);
        }
    });

    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let password_success = RwSignal::new(String::new());
    let password_busy = RwSignal::new(false);

    let active_tab = RwSignal::new("profile");

    // Lifetime activity counts from the two list endpoints.
    let activity = LocalResource::new(move || async move {
        let moods = api::fetch_mood_entries(http).await.unwrap_or_default();
        let journals = api::fetch_journals(http, 1, 1, "", true).await;
        let journal_count = journals.as_ref().map_or(0, Listing::count);
        let last_mood = moods.first().map(|entry| entry.created_at.clone());
        (moods.len(), journal_count, last_mood)
    });

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_profile_input(&username.get(), &email.get()) {
            error.set(message.to_owned());
            return;
        }
        let Some(account) = store.account() else {
            return;
        };
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        let patch = AccountUpdate {
            username: Some(username.get_untracked().trim().to_owned()),
            email: Some(email.get_untracked().trim().to_owned()),
            first_name: Some(first_name.get_untracked().trim().to_owned()),
            last_name: Some(last_name.get_untracked().trim().to_owned()),
            bio: Some(bio.get_untracked().trim().to_owned()),
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(http, &account.id, &patch).await {
                Ok(updated) => {
                    store.update_user(&merge_patch(&updated));
                    success.set("Profile updated successfully!".to_owned());
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (account, patch);
            busy.set(false);
        }
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get() {
            return;
        }
        if let Err(message) = validate_password_change(
            &current_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        ) {
            password_error.set(message.to_owned());
            return;
        }
        password_busy.set(true);
        password_error.set(String::new());
        password_success.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let current = current_password.get_untracked();
            let new = new_password.get_untracked();
            match crate::net::api::change_password(http, &current, &new).await {
                Ok(()) => {
                    password_success.set("Password changed successfully!".to_owned());
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(message) => password_error.set(message),
            }
            password_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            password_busy.set(false);
        }
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                {move || {
                    store
                        .account()
                        .map(|account| {
                            let avatar = account
                                .profile_picture
                                .clone()
                                .map(|src| {
                                    view! {
                                        <img
                                            class="profile-page__avatar"
                                            src=src
                                            alt="Profile picture"
                                        />
                                    }
                                        .into_any()
                                })
                                .unwrap_or_else(|| {
                                    view! {
                                        <span class="profile-page__avatar profile-page__avatar--initials">
                                            {account.initials()}
                                        </span>
                                    }
                                        .into_any()
                                });
                            view! {
                                {avatar}
                                <h1>{account.display_name()}</h1>
                                <p class="profile-page__handle">{format!("@{}", account.username)}</p>
                                <Show when={
                                    let bio = account.bio.clone();
                                    move || !bio.is_empty()
                                }>
                                    <p class="profile-page__bio">{account.bio.clone()}</p>
                                </Show>
                            }
                        })
                }}
            </header>

            <div class="profile-page__stats">
                {move || {
                    activity
                        .get()
                        .map(|(mood_count, journal_count, last_mood)| {
                            let joined = store
                                .account()
                                .and_then(|a| a.date_joined)
                                .map_or_else(|| "N/A".to_owned(), |d| format_date(&d));
                            let last = last_mood
                                .map_or_else(|| "Never".to_owned(), |d| format_date(&d));
                            view! {
                                <StatCard value=mood_count.to_string() label="Mood Entries"/>
                                <StatCard value=journal_count.to_string() label="Journal Entries"/>
                                <StatCard value=joined label="Member Since"/>
                                <StatCard value=last label="Last Activity"/>
                            }
                        })
                }}
            </div>

            <div class="profile-page__tabs" role="tablist">
                <button
                    class=move || tab_class(active_tab.get(), "profile")
                    on:click=move |_| active_tab.set("profile")
                >
                    "Profile Information"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), "password")
                    on:click=move |_| active_tab.set("password")
                >
                    "Change Password"
                </button>
            </div>

            <Show when=move || active_tab.get() == "profile">
                <div class="form-card">
                    <h2>"Edit Profile"</h2>

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error" role="alert">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="form-success" role="status">{move || success.get()}</p>
                    </Show>

                    <form on:submit=on_profile_submit.clone()>
                        <label class="form-field">
                            "Username *"
                            <input
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="form-field">
                            "Email *"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="form-field">
                            "First Name"
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="form-field">
                            "Last Name"
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="form-field">
                            "Bio"
                            <textarea
                                rows="3"
                                maxlength="500"
                                placeholder="Tell us a little about yourself..."
                                prop:value=move || bio.get()
                                on:input=move |ev| bio.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            ></textarea>
                            <span class="form-field__hint">
                                {move || format!("{}/500 characters", bio.get().chars().count())}
                            </span>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Updating..." } else { "Update Profile" }}
                        </button>
                    </form>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "password">
                <div class="form-card">
                    <h2>"Change Password"</h2>

                    <Show when=move || !password_error.get().is_empty()>
                        <p class="form-error" role="alert">{move || password_error.get()}</p>
                    </Show>
                    <Show when=move || !password_success.get().is_empty()>
                        <p class="form-success" role="status">{move || password_success.get()}</p>
                    </Show>

                    <form on:submit=on_password_submit.clone()>
                        <label class="form-field">
                            "Current Password *"
                            <input
                                type="password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                                disabled=move || password_busy.get()
                            />
                        </label>
                        <label class="form-field">
                            "New Password *"
                            <input
                                type="password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                                disabled=move || password_busy.get()
                            />
                            <span class="form-field__hint">
                                "Password must be at least 8 characters long"
                            </span>
                        </label>
                        <label class="form-field">
                            "Confirm New Password *"
                            <input
                                type="password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                disabled=move || password_busy.get()
                            />
                        </label>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || password_busy.get()
                        >
                            {move || {
                                if password_busy.get() { "Changing..." } else { "Change Password" }
                            }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

fn tab_class(active: &str, tab: &str) -> &'static str {
    if active == tab { "tab tab--active" } else { "tab" }
}
