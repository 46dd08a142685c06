use super::*;
use time::Date;
use time::macros::date;

fn person(first: &str, last: &str, birthday: Date) -> Person {
    Person {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        birthday,
        address: None,
        phone_number: None,
    }
}

fn directory() -> Vec<Person> {
    vec![
        person("John", "Doe", date!(1990 - 05 - 15)),
        person("Jane", "Smith", date!(1985 - 08 - 22)),
        person("Peter", "Jones", date!(1992 - 11 - 30)),
        person("John", "Wick", date!(1964 - 09 - 02)),
        person("Sarah", "Connor", date!(1965 - 05 - 13)),
        person("Martin", "McFly", date!(1968 - 06 - 12)),
    ]
}

fn names(persons: &[Person]) -> Vec<String> {
    persons.iter().map(Person::full_name).collect()
}

fn filter(text: &str, from: Option<Date>, to: Option<Date>) -> PersonFilter {
    PersonFilter {
        text: text.to_owned(),
        birthday_from: from,
        birthday_to: to,
    }
}

#[test]
fn empty_filter_returns_everyone_sorted_by_name() {
    let result = apply_filter(&directory(), &PersonFilter::default());
    assert_eq!(
        names(&result),
        vec!["Jane Smith", "John Doe", "John Wick", "Martin McFly", "Peter Jones", "Sarah Connor"]
    );
}

#[test]
fn text_matches_first_name_case_insensitively() {
    let result = apply_filter(&directory(), &filter("john", None, None));
    assert_eq!(names(&result), vec!["John Doe", "John Wick"]);
}

#[test]
fn text_matches_last_name() {
    let result = apply_filter(&directory(), &filter("connor", None, None));
    assert_eq!(names(&result), vec!["Sarah Connor"]);
}

#[test]
fn text_is_trimmed_before_matching() {
    let result = apply_filter(&directory(), &filter("  mcfly ", None, None));
    assert_eq!(names(&result), vec!["Martin McFly"]);
}

#[test]
fn lower_bound_only() {
    let result = apply_filter(&directory(), &filter("", Some(date!(1990 - 01 - 01)), None));
    assert_eq!(names(&result), vec!["John Doe", "Peter Jones"]);
}

#[test]
fn upper_bound_only() {
    let result = apply_filter(&directory(), &filter("", None, Some(date!(1965 - 12 - 31))));
    assert_eq!(names(&result), vec!["John Wick", "Sarah Connor"]);
}

#[test]
fn bounds_are_inclusive() {
    let day = date!(1964 - 09 - 02);
    let result = apply_filter(&directory(), &filter("", Some(day), Some(day)));
    assert_eq!(names(&result), vec!["John Wick"]);
}

#[test]
fn text_and_range_combine() {
    let result = apply_filter(
        &directory(),
        &filter("j", Some(date!(1980 - 01 - 01)), Some(date!(1991 - 01 - 01))),
    );
    assert_eq!(names(&result), vec!["Jane Smith", "John Doe"]);
}

#[test]
fn unmatched_text_returns_nothing() {
    assert!(apply_filter(&directory(), &filter("NonExistentName", None, None)).is_empty());
}

#[test]
fn inverted_range_returns_nothing() {
    let result = apply_filter(
        &directory(),
        &filter("", Some(date!(2000 - 01 - 01)), Some(date!(1990 - 01 - 01))),
    );
    assert!(result.is_empty());
}

#[test]
fn empty_directory_returns_nothing() {
    assert!(apply_filter(&[], &PersonFilter::default()).is_empty());
}
