//! Journal list: search, ordering, pagination, and deletion.

use leptos::prelude::*;

use crate::components::pagination::{Pagination, page_count};
use crate::net::api;
use crate::net::types::Journal;
use crate::session::store::use_session;
use crate::util::date::format_date_time;

const PAGE_SIZE: usize = 6;

#[component]
pub fn JournalsPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();

    let search = RwSignal::new(String::new());
    let newest_first = RwSignal::new(true);
    let page = RwSignal::new(1usize);

    let journals = LocalResource::new(move || {
        let page = page.get();
        let search = search.get();
        let newest = newest_first.get();
        async move {
            api::fetch_journals(http, page, PAGE_SIZE, &search, newest)
                .await
                .map(|listing| (listing.count(), listing.into_vec()))
        }
    });

    let total_pages = Signal::derive(move || {
        journals
            .get()
            .flatten()
            .map(|(count, _)| page_count(count, PAGE_SIZE))
            .unwrap_or_default()
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this journal entry?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let journals = journals.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_journal(http, &id).await {
                    Ok(()) => journals.refetch(),
                    Err(message) => leptos::logging::warn!("journal delete failed: {message}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="journals-page">
            <header class="journals-page__header">
                <h1>"Journals"</h1>
                <a href="/journals/new" class="btn btn--primary">
                    "New Entry"
                </a>
            </header>

            <div class="journals-page__controls">
                <input
                    type="search"
                    placeholder="Search your journals..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <select on:change=move |ev| {
                    newest_first.set(event_target_value(&ev) == "newest");
                    page.set(1);
                }>
                    <option value="newest" selected=move || newest_first.get()>
                        "Newest first"
                    </option>
                    <option value="oldest" selected=move || !newest_first.get()>
                        "Oldest first"
                    </option>
                </select>
            </div>

            <Suspense fallback=move || view! { <p>"Loading journal entries..."</p> }>
                {move || {
                    journals
                        .get()
                        .map(|loaded| match loaded {
                            Some((_, entries)) if !entries.is_empty() => {
                                view! {
                                    <ul class="journal-list">
                                        {entries
                                            .into_iter()
                                            .map(|journal| journal_card(journal, on_delete))
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! {
                                    <div class="card__empty">
                                        <p>"No journal entries found"</p>
                                        <a href="/journals/new" class="btn btn--primary">
                                            "Write Your First Entry"
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="form-error">"Failed to load journal entries"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Pagination
                current=Signal::derive(move || page.get())
                total=total_pages
                on_select=Callback::new(move |selected| page.set(selected))
            />
        </div>
    }
}

fn journal_card(journal: Journal, on_delete: Callback<String>) -> impl IntoView {
    let excerpt = if journal.content.chars().count() > 150 {
        format!("{}...", journal.content.chars().take(150).collect::<String>())
    } else {
        journal.content.clone()
    };
    let id = journal.id.clone();
    view! {
        <li class="journal-list__item card">
            <div>
                <h3>{journal.title.clone()}</h3>
                <p>{excerpt}</p>
                <small>{format_date_time(&journal.created_at)}</small>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </li>
    }
}
