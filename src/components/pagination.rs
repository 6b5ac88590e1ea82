//! Page navigation for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of pages needed for `count` items, at least one page's worth of UI
/// only when there is something to page through.
pub fn page_count(count: i64, page_size: usize) -> usize {
    if count <= 0 || page_size == 0 {
        return 0;
    }
    #[allow(clippy::cast_sign_loss)]
    let count = count as usize;
    count.div_ceil(page_size)
}

/// Sliding window of page numbers around `current`, clamped to the ends so
/// the window always shows `max_visible` pages when that many exist.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<usize> {
    if total == 0 || max_visible == 0 {
        return Vec::new();
    }
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }
    (start..=end).collect()
}

/// Previous/next arrows around a sliding window of page buttons. Hidden when
/// there is a single page.
#[component]
pub fn Pagination(
    current: Signal<usize>,
    total: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || (total.get() > 1)>
            <nav class="pagination" aria-label="pagination">
                <button
                    class="pagination__arrow"
                    disabled=move || current.get() == 1
                    on:click=move |_| on_select.run(current.get() - 1)
                >
                    "‹"
                </button>
                {move || {
                    page_window(current.get(), total.get(), 5)
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == page {
                                            "pagination__page pagination__page--active"
                                        } else {
                                            "pagination__page"
                                        }
                                    }
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__arrow"
                    disabled=move || current.get() == total.get()
                    on:click=move |_| on_select.run(current.get() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
