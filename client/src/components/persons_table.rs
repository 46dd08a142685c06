//! Table of contacts with a pagination footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fully controlled by the directory page: rows, paging and total come in as
//! signals, row clicks and paging changes go out as callbacks.

#[cfg(test)]
#[path = "persons_table_test.rs"]
mod persons_table_test;

use std::collections::HashMap;

use leptos::prelude::*;

use people::pagination::Pagination;
use people::person::{Person, format_birthday};

use crate::components::table_pagination::TablePagination;

/// Message shown in place of rows when the result set is empty.
pub const EMPTY_MESSAGE: &str = "There is no data to display";

/// Pair each row with its display key. A repeated name gets a `#n` suffix so
/// two people with the same name stay two rows.
pub(crate) fn keyed_rows(rows: Vec<Person>) -> Vec<(String, Person)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    rows.into_iter()
        .map(|person| {
            let key = person.row_key();
            let count = seen.entry(key.clone()).or_insert(0);
            *count += 1;
            let key = if *count == 1 { key } else { format!("{key}#{count}") };
            (key, person)
        })
        .collect()
}

#[component]
pub fn PersonsTable(
    #[prop(into)] rows: Signal<Vec<Person>>,
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] total: Signal<usize>,
    on_row_click: Callback<Person>,
    on_page_change: Callback<usize>,
    on_rows_per_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="persons-table">
            <table class="persons-table__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Surname"</th>
                        <th>"Date of birth"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !rows.get().is_empty()
                        fallback=|| {
                            view! {
                                <tr class="persons-table__empty">
                                    <td colspan="3">{EMPTY_MESSAGE}</td>
                                </tr>
                            }
                        }
                    >
                        <For
                            each=move || keyed_rows(rows.get())
                            key=|(key, _)| key.clone()
                            children=move |(key, person)| {
                                view! { <PersonRow row_key=key person=person on_click=on_row_click/> }
                            }
                        />
                    </Show>
                </tbody>
            </table>
            <TablePagination
                pagination=pagination
                total=total
                on_page_change=on_page_change
                on_rows_per_page_change=on_rows_per_page_change
            />
        </div>
    }
}

#[component]
fn PersonRow(row_key: String, person: Person, on_click: Callback<Person>) -> impl IntoView {
    let birthday = format_birthday(person.birthday);
    let first_name = person.first_name.clone();
    let last_name = person.last_name.clone();
    let person_for_key = person.clone();

    view! {
        <tr
            class="persons-table__row"
            data-key=row_key
            tabindex="0"
            on:click=move |_| on_click.run(person.clone())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_click.run(person_for_key.clone());
                }
            }
        >
            <td>{first_name}</td>
            <td>{last_name}</td>
            <td>{birthday}</td>
        </tr>
    }
}
