//! Mood history and analytics: charts over a selectable time range.

#[cfg(test)]
#[path = "mood_history_test.rs"]
mod mood_history_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::charts::{MoodBarChart, MoodDoughnutChart, MoodLineChart};
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::MoodHistoryDay;
use crate::session::store::use_session;
use crate::util::chart_data::{average_mood_series, mood_level_counts};
use crate::util::date::format_date;
use crate::util::mood::{mood_color, mood_emoji, mood_label};
use crate::util::storage;

/// localStorage key for the persisted view preferences.
const PREFS_KEY: &str = "mindmate_history_prefs";

const DAY_CHOICES: [(u16, &str); 4] =
    [(7, "Last 7 days"), (30, "Last 30 days"), (90, "Last 3 months"), (365, "Last year")];

/// Which chart the user is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Doughnut,
}

impl ChartKind {
    fn value(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "bar" => ChartKind::Bar,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Line,
        }
    }
}

/// Persisted view preferences.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct HistoryPrefs {
    days: u16,
    chart: ChartKind,
}

impl Default for HistoryPrefs {
    fn default() -> Self {
        Self { days: 30, chart: ChartKind::Line }
    }
}

/// Rows for the recent-entries table: the newest ten entries across the
/// returned day buckets, preserving bucket order.
fn recent_entry_rows(days: &[MoodHistoryDay]) -> Vec<crate::net::types::MoodEntry> {
    days.iter().take(10).flat_map(|day| day.mood_entries.iter().cloned()).collect()
}

/// Notes cell text: truncated to 50 characters, italic placeholder handled
/// by the caller.
fn notes_cell(notes: Option<&str>) -> Option<String> {
    let notes = notes?.trim();
    if notes.is_empty() {
        return None;
    }
    if notes.chars().count() > 50 {
        Some(format!("{}...", notes.chars().take(50).collect::<String>()))
    } else {
        Some(notes.to_owned())
    }
}

#[component]
pub fn MoodHistoryPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();

    let initial = storage::load_json::<HistoryPrefs>(PREFS_KEY).unwrap_or_default();
    let days = RwSignal::new(initial.days);
    let chart = RwSignal::new(initial.chart);

    // Persist preference changes.
    Effect::new(move || {
        storage::save_json(PREFS_KEY, &HistoryPrefs { days: days.get(), chart: chart.get() });
    });

    let history = LocalResource::new(move || api::fetch_mood_history(http, days.get()));
    let stats = LocalResource::new(move || api::fetch_mood_stats(http));

    let on_export = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::export_mood_csv(http).await {
                Ok(csv) => download_csv(&csv),
                Err(message) => leptos::logging::warn!("mood export failed: {message}"),
            }
        });
    };

    view! {
        <div class="history-page">
            <header class="history-page__header">
                <div>
                    <h1>"Mood History & Analytics"</h1>
                    <p>
                        "Track your emotional journey and discover patterns in your mental health."
                    </p>
                </div>
                <div class="history-page__actions">
                    <button class="btn" on:click=on_export>
                        "Export Data"
                    </button>
                    <a href="/track-mood" class="btn btn--primary">
                        "Add Mood"
                    </a>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading mood history..."</p> }>
                <div class="history-page__stats">
                    {move || {
                        stats
                            .get()
                            .map(|stats| {
                                let stats = stats.unwrap_or_default();
                                let average = stats
                                    .average_mood
                                    .map_or_else(|| "N/A".to_owned(), |avg| format!("{avg:.1}"));
                                let most_common = stats
                                    .most_common_mood
                                    .map_or("😐", mood_emoji)
                                    .to_owned();
                                view! {
                                    <StatCard
                                        value=stats.total_entries.to_string()
                                        label="Total Entries"
                                    />
                                    <StatCard value=average label="Average Mood"/>
                                    <StatCard value=stats.streak.to_string() label="Day Streak"/>
                                    <StatCard value=most_common label="Most Common"/>
                                }
                            })
                    }}
                </div>

                <div class="history-page__controls">
                    <label>
                        "Time Range:"
                        <select on:change=move |ev| {
                            days.set(event_target_value(&ev).parse().unwrap_or(30));
                        }>
                            {DAY_CHOICES
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option
                                            value=value.to_string()
                                            selected=move || days.get() == value
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        "Chart Type:"
                        <select on:change=move |ev| {
                            chart.set(ChartKind::from_value(&event_target_value(&ev)));
                        }>
                            {[ChartKind::Line, ChartKind::Bar, ChartKind::Doughnut]
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <option
                                            value=kind.value()
                                            selected=move || chart.get() == kind
                                        >
                                            {format!("{kind:?} Chart")}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                {move || {
                    history
                        .get()
                        .map(|loaded| {
                            let buckets = loaded.unwrap_or_default();
                            if buckets.is_empty() {
                                return view! {
                                    <div class="card__empty">
                                        <h3>"No Data Available"</h3>
                                        <p>
                                            "Start tracking your mood to see analytics here."
                                        </p>
                                        <a href="/track-mood" class="btn btn--primary">
                                            "Add Your First Mood"
                                        </a>
                                    </div>
                                }
                                    .into_any();
                            }
                            let chart_view = match chart.get() {
                                ChartKind::Line => {
                                    view! {
                                        <MoodLineChart points=average_mood_series(&buckets)/>
                                    }
                                        .into_any()
                                }
                                ChartKind::Bar => {
                                    view! { <MoodBarChart counts=mood_level_counts(&buckets)/> }
                                        .into_any()
                                }
                                ChartKind::Doughnut => {
                                    view! {
                                        <MoodDoughnutChart counts=mood_level_counts(&buckets)/>
                                    }
                                        .into_any()
                                }
                            };
                            view! {
                                <div class="history-page__chart card">{chart_view}</div>
                                <section class="card">
                                    <h2>"Recent Mood Entries"</h2>
                                    <table class="entry-table">
                                        <thead>
                                            <tr>
                                                <th>"Date"</th>
                                                <th>"Mood"</th>
                                                <th>"Level"</th>
                                                <th>"Notes"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {recent_entry_rows(&buckets)
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <tr>
                                                            <td>{format_date(&entry.created_at)}</td>
                                                            <td>
                                                                {mood_emoji(entry.mood_level)} " "
                                                                {mood_label(entry.mood_level)}
                                                            </td>
                                                            <td>
                                                                <span
                                                                    class="entry-table__badge"
                                                                    style=format!(
                                                                        "background-color: {}",
                                                                        mood_color(entry.mood_level),
                                                                    )
                                                                >
                                                                    {format!("{}/5", entry.mood_level)}
                                                                </span>
                                                            </td>
                                                            <td>
                                                                {notes_cell(entry.notes.as_deref())
                                                                    .unwrap_or_else(|| "No notes".to_owned())}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </section>
                            }
                                .into_any()
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Trigger a browser download of the exported CSV.
#[cfg(feature = "csr")]
fn download_csv(csv: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    #[allow(clippy::cast_possible_truncation)]
    let today = chrono::DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    if let Ok(anchor) = document.create_element("a") {
        if let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(&format!("mood_data_{today}.csv"));
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
