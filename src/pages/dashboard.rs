//! Dashboard: greeting, headline statistics, and recent activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{Journal, Listing, MoodEntry};
use crate::session::store::use_session;
use crate::util::date::format_date;
use crate::util::mood::{mood_emoji, mood_label};

/// Greeting for the local hour of day.
fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Current local hour; fixed to morning off-browser.
fn local_hour() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "csr"))]
    {
        9
    }
}

/// `"N/A"`-safe one-decimal rendering of the average mood.
fn average_mood_text(average: Option<f64>) -> String {
    average.map_or_else(|| "N/A".to_owned(), |avg| format!("{avg:.1}"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();

    let stats = LocalResource::new(move || api::fetch_mood_stats(http));
    let recent_moods = LocalResource::new(move || api::fetch_recent_moods(http));
    let recent_journals = LocalResource::new(move || async move {
        api::fetch_journals(http, 1, 3, "", true).await.map(Listing::into_vec)
    });

    let greeting_line = move || {
        let name = store
            .account()
            .map(|a| {
                if a.first_name.is_empty() { a.username } else { a.first_name }
            })
            .unwrap_or_default();
        format!("{}, {name}!", greeting(local_hour()))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__welcome">
                <h1>{greeting_line}</h1>
                <p>"Welcome back to your mental health dashboard. How are you feeling today?"</p>
                <a href="/track-mood" class="btn btn--primary">
                    "Track Your Mood"
                </a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                <div class="dashboard-page__stats">
                    {move || {
                        stats
                            .get()
                            .map(|stats| {
                                let stats = stats.unwrap_or_default();
                                view! {
                                    <StatCard
                                        value=stats.total_entries.to_string()
                                        label="Total Moods"
                                    />
                                    <StatCard value=stats.streak.to_string() label="Day Streak"/>
                                    <StatCard
                                        value=average_mood_text(stats.average_mood)
                                        label="Avg Mood"
                                    />
                                }
                            })
                    }}
                </div>

                <div class="dashboard-page__columns">
                    <section class="card">
                        <header class="card__header">
                            <h2>"Recent Moods"</h2>
                            <a href="/history">"View All"</a>
                        </header>
                        {move || {
                            recent_moods
                                .get()
                                .map(|moods| recent_mood_list(&moods.unwrap_or_default()))
                        }}
                    </section>

                    <section class="card">
                        <header class="card__header">
                            <h2>"Recent Journals"</h2>
                            <a href="/journals">"View All"</a>
                        </header>
                        {move || {
                            recent_journals
                                .get()
                                .map(|journals| recent_journal_list(&journals.unwrap_or_default()))
                        }}
                    </section>
                </div>
            </Suspense>

            <section class="card dashboard-page__actions">
                <h2>"Quick Actions"</h2>
                <a href="/track-mood" class="btn">
                    "Track Mood"
                </a>
                <a href="/journals/new" class="btn">
                    "Write Journal"
                </a>
                <a href="/history" class="btn">
                    "View Analytics"
                </a>
                <a href="/profile" class="btn">
                    "Edit Profile"
                </a>
            </section>
        </div>
    }
}

fn recent_mood_list(moods: &[MoodEntry]) -> AnyView {
    if moods.is_empty() {
        return view! {
            <div class="card__empty">
                <p>"No mood entries yet"</p>
                <a href="/track-mood" class="btn btn--primary">
                    "Add Your First Mood"
                </a>
            </div>
        }
        .into_any();
    }
    view! {
        <ul class="entry-list">
            {moods
                .iter()
                .map(|mood| {
                    view! {
                        <li class="entry-list__item">
                            <span class="entry-list__emoji">{mood_emoji(mood.mood_level)}</span>
                            <div>
                                <h3>{mood_label(mood.mood_level)}</h3>
                                <small>{format_date(&mood.created_at)}</small>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

fn recent_journal_list(journals: &[Journal]) -> AnyView {
    if journals.is_empty() {
        return view! {
            <div class="card__empty">
                <p>"No journal entries yet"</p>
                <a href="/journals/new" class="btn btn--primary">
                    "Write Your First Entry"
                </a>
            </div>
        }
        .into_any();
    }
    view! {
        <ul class="entry-list">
            {journals
                .iter()
                .map(|journal| {
                    view! {
                        <li class="entry-list__item">
                            <div>
                                <h3>{journal.title.clone()}</h3>
                                <p>{excerpt(&journal.content, 100)}</p>
                                <small>{format_date(&journal.created_at)}</small>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// First `limit` characters of `content` with an ellipsis when truncated.
fn excerpt(content: &str, limit: usize) -> String {
    if content.chars().count() <= limit {
        content.to_owned()
    } else {
        let cut: String = content.chars().take(limit).collect();
        format!("{cut}...")
    }
}
