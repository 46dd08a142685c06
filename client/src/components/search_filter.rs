//! Search bar: free-text input plus a birthday range.
//!
//! Presentational only. Every edit reports the whole next filter through
//! `on_change`; debouncing and committing are the page's job.

use leptos::prelude::*;

use people::query::{PersonFilter, date_input_value, parse_date_input};

#[component]
pub fn SearchFilter(#[prop(into)] draft: Signal<PersonFilter>, on_change: Callback<PersonFilter>) -> impl IntoView {
    let on_text = move |ev: leptos::ev::Event| {
        let mut next = draft.get_untracked();
        next.text = event_target_value(&ev);
        on_change.run(next);
    };
    let on_from = move |ev: leptos::ev::Event| {
        let mut next = draft.get_untracked();
        next.birthday_from = parse_date_input(&event_target_value(&ev));
        on_change.run(next);
    };
    let on_to = move |ev: leptos::ev::Event| {
        let mut next = draft.get_untracked();
        next.birthday_to = parse_date_input(&event_target_value(&ev));
        on_change.run(next);
    };
    let on_reset = move |_| on_change.run(PersonFilter::default());

    view! {
        <form class="search-filter" autocomplete="off" novalidate=true on:submit=|ev| ev.prevent_default()>
            <input
                class="search-filter__text"
                type="search"
                placeholder="Search by name..."
                aria-label="Search by name"
                prop:value=move || draft.get().text
                on:input=on_text
            />
            <label class="search-filter__date">
                "Born from"
                <input
                    type="date"
                    prop:value=move || date_input_value(draft.get().birthday_from)
                    on:change=on_from
                />
            </label>
            <label class="search-filter__date">
                "Born to"
                <input
                    type="date"
                    prop:value=move || date_input_value(draft.get().birthday_to)
                    on:change=on_to
                />
            </label>
            <button
                class="btn search-filter__reset"
                type="button"
                disabled=move || draft.get().is_empty()
                on:click=on_reset
            >
                "Reset"
            </button>
            <Show when=move || draft.get().has_inverted_range()>
                <p class="search-filter__hint">"The start date is after the end date; nothing will match."</p>
            </Show>
        </form>
    }
}
