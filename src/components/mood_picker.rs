//! Five-level mood selector used by the track-mood page.

use leptos::prelude::*;

use crate::util::mood::MOOD_SCALE;

/// Row of selectable mood options; the chosen level lands in `selected`.
#[component]
pub fn MoodPicker(selected: RwSignal<Option<u8>>) -> impl IntoView {
    view! {
        <div class="mood-picker">
            {MOOD_SCALE
                .iter()
                .map(|option| {
                    let level = option.level;
                    let is_selected = move || selected.get() == Some(level);
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() {
                                    "mood-picker__option mood-picker__option--selected"
                                } else {
                                    "mood-picker__option"
                                }
                            }
                            style=move || {
                                if is_selected() {
                                    format!("border-color: {}", option.color)
                                } else {
                                    String::new()
                                }
                            }
                            on:click=move |_| selected.set(Some(level))
                        >
                            <span class="mood-picker__emoji">{option.emoji}</span>
                            <span class="mood-picker__label">{option.label}</span>
                            <span class="mood-picker__level">{format!("Level {level}")}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
