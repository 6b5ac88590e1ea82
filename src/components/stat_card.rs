//! Small statistic card used on dashboard, history, and profile screens.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] emblem: String,
) -> impl IntoView {
    let emblem = (!emblem.is_empty())
        .then(|| view! { <span class="stat-card__emblem">{emblem.clone()}</span> });
    view! {
        <div class="stat-card">
            {emblem}
            <h3 class="stat-card__value">{value}</h3>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}
