//! Add-journal page, optionally linked to a mood entry from the route.

#[cfg(test)]
#[path = "add_journal_test.rs"]
mod add_journal_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::types::JournalDraft;
use crate::session::store::use_session;
use crate::util::mood::{mood_emoji, mood_label};

#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u32 = 1500;

/// Trimmed title/content, or the message shown for the first missing field.
fn validate_journal_input(title: &str, content: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please enter a title for your journal entry");
    }
    let content = content.trim();
    if content.is_empty() {
        return Err("Please write some content for your journal entry");
    }
    Ok((title.to_owned(), content.to_owned()))
}

/// Suggested title: `"<date> - <Mood> Day"` when a mood is linked, otherwise
/// `"Journal Entry - <date>"`.
#[cfg(any(test, feature = "csr"))]
fn suggested_title(date_label: &str, mood_level: Option<u8>) -> String {
    match mood_level {
        Some(level) => format!("{date_label} - {} Day", mood_label(level)),
        None => format!("Journal Entry - {date_label}"),
    }
}

/// Today's long-form date label.
#[cfg(feature = "csr")]
fn today_label() -> String {
    #[allow(clippy::cast_possible_truncation)]
    let millis = js_sys::Date::now() as i64;
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn AddJournalPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();
    let params = use_params_map();
    let mood_id = Memo::new(move |_| params.with(|p| p.get("mood_id")));

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    // Linked mood entry, when the route carries one.
    let linked_mood = LocalResource::new(move || {
        let id = mood_id.get();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_mood_entry(http, &id).await,
                None => None,
            }
        }
    });

    // Prefill the title once the linked mood resolves, if still untouched.
    Effect::new(move || {
        if let Some(Some(entry)) = linked_mood.get() {
            if title.get_untracked().is_empty() {
                title.set(format!("Journal Entry - {}", mood_label(entry.mood_level)));
            }
        }
    });

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_suggest = move |_| {
        #[cfg(feature = "csr")]
        {
            let level = linked_mood.get().flatten().map(|entry| entry.mood_level);
            title.set(suggested_title(&today_label(), level));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (title_value, content_value) =
            match validate_journal_input(&title.get(), &content.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let draft = JournalDraft {
            title: title_value,
            content: content_value,
            mood_entry: mood_id.get_untracked(),
        };
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_journal(http, &draft).await {
                    Ok(_) => {
                        saved.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            REDIRECT_DELAY_MS,
                        )))
                        .await;
                        navigate("/journals", NavigateOptions::default());
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
            let _ = (http, draft);
        }
    };

    view! {
        <Show
            when=move || !saved.get()
            fallback=|| {
                view! {
                    <div class="success-screen">
                        <h2>"Journal Entry Saved!"</h2>
                        <p>
                            "Your thoughts have been safely recorded. Thank you for taking time to reflect."
                        </p>
                        <a href="/journals" class="btn btn--primary">
                            "View Journals"
                        </a>
                    </div>
                }
            }
        >
            <div class="form-page">
                <div class="form-card form-card--wide">
                    <h2>"Write a Journal Entry"</h2>

                    {move || {
                        linked_mood
                            .get()
                            .flatten()
                            .map(|entry| {
                                view! {
                                    <p class="linked-mood">
                                        "Reflecting on: "
                                        <span>{mood_emoji(entry.mood_level)}</span>
                                        " "
                                        {mood_label(entry.mood_level)}
                                    </p>
                                }
                            })
                    }}

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error" role="alert">{move || error.get()}</p>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <label class="form-field">
                            "Title"
                            <input
                                type="text"
                                maxlength="200"
                                placeholder="Give your entry a title"
                                prop:value=move || title.get()
                                on:input=move |ev| {
                                    title.set(event_target_value(&ev));
                                    error.set(String::new());
                                }
                                disabled=move || busy.get()
                            />
                        </label>
                        <button type="button" class="btn btn--link" on:click=on_suggest.clone()>
                            "Suggest a title"
                        </button>

                        <label class="form-field">
                            "Content"
                            <textarea
                                rows="10"
                                placeholder="Write freely about your day, your feelings, or anything on your mind..."
                                prop:value=move || content.get()
                                on:input=move |ev| {
                                    content.set(event_target_value(&ev));
                                    error.set(String::new());
                                }
                                disabled=move || busy.get()
                            ></textarea>
                        </label>

                        <div class="form-actions">
                            <a href="/journals" class="btn">
                                "Cancel"
                            </a>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get()
                            >
                                {move || if busy.get() { "Saving..." } else { "Save Entry" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
