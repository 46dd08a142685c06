//! Local search over an already-fetched person list.
//!
//! Mirrors the endpoint's own search semantics so client-side paging shows
//! the same rows in the same order the server would.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::person::Person;
use crate::query::PersonFilter;

/// Filter and sort `persons`.
///
/// Text matches case-insensitively against first or last name. Birthday
/// bounds are inclusive. The result is ordered by first name, then last name.
#[must_use]
pub fn apply_filter(persons: &[Person], filter: &PersonFilter) -> Vec<Person> {
    let needle = filter.trimmed_text().to_lowercase();
    let mut matched: Vec<Person> = persons
        .iter()
        .filter(|p| matches_text(p, &needle) && matches_birthday(p, filter))
        .cloned()
        .collect();
    sort_by_name(&mut matched);
    matched
}

/// Stable display order: first name, then last name.
pub fn sort_by_name(persons: &mut [Person]) {
    persons.sort_by(|a, b| {
        a.first_name
            .cmp(&b.first_name)
            .then_with(|| a.last_name.cmp(&b.last_name))
    });
}

fn matches_text(person: &Person, needle: &str) -> bool {
    needle.is_empty()
        || person.first_name.to_lowercase().contains(needle)
        || person.last_name.to_lowercase().contains(needle)
}

fn matches_birthday(person: &Person, filter: &PersonFilter) -> bool {
    let after_from = filter.birthday_from.is_none_or(|from| person.birthday >= from);
    let before_to = filter.birthday_to.is_none_or(|to| person.birthday <= to);
    after_from && before_to
}
