//! Achievements: unlock status and progress, grouped by achievement type.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::AchievementProgress;
use crate::session::store::use_session;
use crate::util::date::format_date;

/// Heading for an achievement type key.
fn achievement_type_title(achievement_type: &str) -> &'static str {
    match achievement_type {
        "mood_streak" => "Mood Streaks",
        "journal_count" => "Journal Entries",
        "mood_count" => "Mood Tracking",
        "consistency" => "Consistency",
        _ => "Milestones",
    }
}

/// Human-readable unlock requirement.
fn requirement_text(achievement_type: &str, requirement_value: i64) -> String {
    match achievement_type {
        "mood_streak" => {
            format!("Track your mood for {requirement_value} consecutive days")
        }
        "journal_count" => format!("Write {requirement_value} journal entries"),
        "mood_count" => format!("Record {requirement_value} mood entries"),
        "consistency" => {
            format!("Track your mood on {requirement_value} different days in a month")
        }
        _ => format!("Complete {requirement_value} activities"),
    }
}

/// Group by achievement type, preserving first-seen group order.
fn group_by_type(items: &[AchievementProgress]) -> Vec<(String, Vec<AchievementProgress>)> {
    let mut groups: Vec<(String, Vec<AchievementProgress>)> = Vec::new();
    for item in items {
        let key = &item.achievement.achievement_type;
        match groups.iter_mut().find(|(group_key, _)| group_key == key) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((key.clone(), vec![item.clone()])),
        }
    }
    groups
}

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let store = use_session();
    let http = store.http();

    let report = LocalResource::new(move || api::fetch_achievements(http));

    view! {
        <div class="achievements-page">
            <header class="achievements-page__header">
                <h1>"Achievements"</h1>
                <p>"Track your progress and unlock rewards for your mental wellness journey"</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading achievements..."</p> }>
                {move || {
                    report
                        .get()
                        .map(|loaded| {
                            let Some(report) = loaded else {
                                return view! {
                                    <p class="form-error" role="alert">
                                        "Failed to load achievements. Please try again later."
                                    </p>
                                }
                                    .into_any();
                            };
                            view! {
                                <div class="achievements-page__summary">
                                    <StatCard
                                        value=report.unlocked_count.to_string()
                                        label="Unlocked"
                                        emblem="🏆"
                                    />
                                    <StatCard
                                        value=report.total_achievements.to_string()
                                        label="Total"
                                        emblem="🎯"
                                    />
                                    <StatCard
                                        value=format!("{}%", report.completion_percentage())
                                        label="Complete"
                                        emblem="📈"
                                    />
                                </div>
                                {group_by_type(&report.achievement_data)
                                    .into_iter()
                                    .map(|(key, members)| {
                                        view! {
                                            <section class="achievements-page__group">
                                                <h2>{achievement_type_title(&key)}</h2>
                                                <div class="achievements-page__cards">
                                                    {members
                                                        .into_iter()
                                                        .map(achievement_card)
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </section>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            }
                                .into_any()
                        })
                }}
            </Suspense>
        </div>
    }
}

fn achievement_card(item: AchievementProgress) -> impl IntoView {
    let achievement = item.achievement;
    let status = if item.is_unlocked {
        let unlocked_on = item
            .unlocked_at
            .map(|at| format!("Unlocked {}", format_date(&at)))
            .unwrap_or_else(|| "Unlocked".to_owned());
        view! { <p class="achievement-card__unlocked">{unlocked_on}</p> }.into_any()
    } else {
        let width = item.progress_percentage.clamp(0.0, 100.0);
        view! {
            <div class="achievement-card__progress">
                <div
                    class="achievement-card__progress-fill"
                    style=format!("width: {width:.0}%")
                ></div>
            </div>
            <p class="achievement-card__progress-text">
                {format!("{} / {}", item.current_progress, achievement.requirement_value)}
            </p>
        }
        .into_any()
    };

    let card_class = if item.is_unlocked {
        "achievement-card achievement-card--unlocked"
    } else {
        "achievement-card"
    };
    view! {
        <div class=card_class>
            <h3>{achievement.name.clone()}</h3>
            <p>{achievement.description.clone()}</p>
            <small>
                {requirement_text(&achievement.achievement_type, achievement.requirement_value)}
            </small>
            {status}
        </div>
    }
}
