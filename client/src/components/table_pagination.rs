//! Pagination footer: rows-per-page selector, range label, prev/next.

use leptos::prelude::*;

use people::pagination::{Pagination, ROWS_PER_PAGE_OPTIONS, parse_rows_per_page};

#[component]
pub fn TablePagination(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] total: Signal<usize>,
    on_page_change: Callback<usize>,
    on_rows_per_page_change: Callback<usize>,
) -> impl IntoView {
    let on_rows = move |ev: leptos::ev::Event| {
        if let Some(rows) = parse_rows_per_page(&event_target_value(&ev)) {
            on_rows_per_page_change.run(rows);
        }
    };
    let on_prev = move |_| {
        if let Some(page) = pagination.get_untracked().prev_page() {
            on_page_change.run(page);
        }
    };
    let on_next = move |_| {
        if let Some(page) = pagination.get_untracked().next_page(total.get_untracked()) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="table-pagination">
            <label class="table-pagination__rows">
                "Rows per page:"
                <select
                    prop:value=move || pagination.get().rows_per_page.to_string()
                    on:change=on_rows
                >
                    {ROWS_PER_PAGE_OPTIONS
                        .iter()
                        .map(|rows| {
                            view! { <option value=rows.to_string()>{rows.to_string()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <span class="table-pagination__range">
                {move || pagination.get().range_label(total.get())}
            </span>
            <button
                class="btn table-pagination__prev"
                title="Previous page"
                disabled=move || pagination.get().prev_page().is_none()
                on:click=on_prev
            >
                "‹"
            </button>
            <button
                class="btn table-pagination__next"
                title="Next page"
                disabled=move || pagination.get().next_page(total.get()).is_none()
                on:click=on_next
            >
                "›"
            </button>
        </div>
    }
}
