//! Track-mood page: pick a level, add optional notes, save.

#[cfg(test)]
#[path = "add_mood_test.rs"]
mod add_mood_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::mood_picker::MoodPicker;
use crate::session::store::use_session;

/// How long the success screen stays up before returning to the dashboard.
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u32 = 1500;

/// Notes payload: trimmed, and omitted entirely when empty.
#[cfg(any(test, feature = "csr"))]
fn notes_payload(notes: &str) -> Option<String> {
    let trimmed = notes.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn AddMoodPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();
    let selected = RwSignal::new(None::<u8>);
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let saved_entry_id = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(level) = selected.get() else {
            error.set("Please select a mood level".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload_notes = notes_payload(&notes.get_untracked());
                match crate::net::api::create_mood_entry(http, level, payload_notes.as_deref())
                    .await
                {
                    Ok(entry) => {
                        saved_entry_id.set(Some(entry.id));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            REDIRECT_DELAY_MS,
                        )))
                        .await;
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (http, level);
        }
    };

    view! {
        <Show
            when=move || saved_entry_id.get().is_none()
            fallback=move || {
                let journal_href = saved_entry_id
                    .get()
                    .map(|id| format!("/journals/new/{id}"))
                    .unwrap_or_else(|| "/journals/new".to_owned());
                view! {
                    <div class="success-screen">
                        <h2>"Mood Saved Successfully!"</h2>
                        <p>"Your mood entry has been recorded. Keep up the great work!"</p>
                        <a href="/dashboard" class="btn btn--primary">
                            "Back to Dashboard"
                        </a>
                        <a href=journal_href class="btn">
                            "Add Journal Entry"
                        </a>
                    </div>
                }
            }
        >
            <div class="form-page">
                <div class="form-card form-card--wide">
                    <h2>"How are you feeling?"</h2>
                    <p class="form-card__subtitle">
                        "Take a moment to check in with yourself and track your current mood."
                    </p>

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error" role="alert">{move || error.get()}</p>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <MoodPicker selected=selected/>

                        <label class="form-field">
                            "Notes (Optional)"
                            <textarea
                                rows="4"
                                maxlength="500"
                                placeholder="What's on your mind? Share any thoughts, feelings, or events that influenced your mood..."
                                prop:value=move || notes.get()
                                on:input=move |ev| notes.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            ></textarea>
                            <span class="form-field__hint">
                                {move || format!("{}/500 characters", notes.get().chars().count())}
                            </span>
                        </label>

                        <div class="form-actions">
                            <a href="/dashboard" class="btn">
                                "Cancel"
                            </a>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get() || selected.get().is_none()
                            >
                                {move || if busy.get() { "Saving..." } else { "Save Mood" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
