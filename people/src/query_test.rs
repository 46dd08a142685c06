use super::*;
use time::macros::date;

fn query(filter: PersonFilter) -> PersonQuery {
    PersonQuery {
        page: 2,
        page_size: 10,
        filter,
    }
}

// =============================================================
// Params
// =============================================================

#[test]
fn params_only_carry_paging_when_filter_is_empty() {
    let params = query(PersonFilter::default()).params();
    assert_eq!(params, vec![("page", "2".to_owned()), ("pageSize", "10".to_owned())]);
}

#[test]
fn params_include_trimmed_text_and_iso_dates() {
    let params = query(PersonFilter {
        text: "  john ".to_owned(),
        birthday_from: Some(date!(1980 - 01 - 01)),
        birthday_to: Some(date!(1991 - 01 - 01)),
    })
    .params();
    assert_eq!(
        params,
        vec![
            ("page", "2".to_owned()),
            ("pageSize", "10".to_owned()),
            ("q", "john".to_owned()),
            ("birthdayFrom", "1980-01-01".to_owned()),
            ("birthdayTo", "1991-01-01".to_owned()),
        ]
    );
}

#[test]
fn params_skip_whitespace_only_text() {
    let params = query(PersonFilter {
        text: "   ".to_owned(),
        birthday_from: None,
        birthday_to: Some(date!(1965 - 12 - 31)),
    })
    .params();
    assert_eq!(params.len(), 3);
    assert_eq!(params[2], ("birthdayTo", "1965-12-31".to_owned()));
}

// =============================================================
// URLs
// =============================================================

#[test]
fn url_appends_persons_path_and_encodes_query() {
    let url = query(PersonFilter {
        text: "o'neil & co".to_owned(),
        ..PersonFilter::default()
    })
    .url("http://localhost:8080")
    .expect("url");
    assert_eq!(url.as_str(), "http://localhost:8080/persons?page=2&pageSize=10&q=o%27neil+%26+co");
}

#[test]
fn persons_url_keeps_base_path_prefix() {
    let url = persons_url("https://contacts.example.com/api").expect("url");
    assert_eq!(url.as_str(), "https://contacts.example.com/api/persons");

    let url = persons_url("https://contacts.example.com/api/").expect("url");
    assert_eq!(url.as_str(), "https://contacts.example.com/api/persons");
}

#[test]
fn persons_url_drops_query_and_fragment_from_base() {
    let url = persons_url("http://localhost:8080/?debug=1#top").expect("url");
    assert_eq!(url.as_str(), "http://localhost:8080/persons");
}

#[test]
fn persons_url_rejects_unusable_base() {
    assert!(matches!(persons_url("not a url"), Err(QueryError::InvalidBase { .. })));
    assert!(matches!(persons_url("mailto:team@example.com"), Err(QueryError::CannotBeABase(_))));
}

// =============================================================
// Filter helpers
// =============================================================

#[test]
fn normalized_filters_compare_equal_across_whitespace() {
    let a = PersonFilter {
        text: " Doe".to_owned(),
        ..PersonFilter::default()
    };
    let b = PersonFilter {
        text: "Doe  ".to_owned(),
        ..PersonFilter::default()
    };
    assert_ne!(a, b);
    assert_eq!(a.normalized(), b.normalized());
}

#[test]
fn is_empty_ignores_whitespace_text() {
    let filter = PersonFilter {
        text: "  ".to_owned(),
        ..PersonFilter::default()
    };
    assert!(filter.is_empty());
}

#[test]
fn inverted_range_is_detected() {
    let filter = PersonFilter {
        text: String::new(),
        birthday_from: Some(date!(2000 - 01 - 01)),
        birthday_to: Some(date!(1990 - 01 - 01)),
    };
    assert!(filter.has_inverted_range());
    assert!(!PersonFilter::default().has_inverted_range());
}

#[test]
fn date_input_round_trip_and_rejections() {
    assert_eq!(parse_date_input("1990-05-15"), Some(date!(1990 - 05 - 15)));
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("1990-5"), None);
    assert_eq!(date_input_value(Some(date!(1990 - 05 - 15))), "1990-05-15");
    assert_eq!(date_input_value(None), "");
}
