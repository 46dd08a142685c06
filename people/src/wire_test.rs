use super::*;
use serde_json::json;

#[test]
fn decode_page_reads_data_and_total() {
    let page = decode_page(&json!({
        "Data": [
            { "firstName": "Jane", "lastName": "Smith", "birthday": "1985-08-22T00:00:00Z" },
            { "firstName": "John", "lastName": "Doe", "birthday": "1990-05-15T00:00:00Z" }
        ],
        "Total": 6,
        "Page": 1,
        "PageSize": 2
    }))
    .expect("page");
    assert_eq!(page.total, 6);
    let names: Vec<String> = page.data.iter().map(Person::full_name).collect();
    assert_eq!(names, vec!["Jane Smith", "John Doe"]);
}

#[test]
fn decode_page_treats_null_data_as_empty() {
    let page = decode_page(&json!({ "Data": null, "Total": 0 })).expect("page");
    assert_eq!(page, PersonPage::default());
}

#[test]
fn decode_page_skips_invalid_records_but_keeps_total() {
    let page = decode_page(&json!({
        "Data": [
            { "firstName": "", "lastName": "Nobody", "birthday": "1990-01-01" },
            { "firstName": "Peter", "lastName": "Jones", "birthday": "1992-11-30" },
            42
        ],
        "Total": 3
    }))
    .expect("page");
    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].last_name, "Jones");
}

#[test]
fn decode_page_requires_total() {
    assert_eq!(decode_page(&json!({ "Data": [] })), Err(DecodeError::MissingTotal));
    assert_eq!(decode_page(&json!({ "Data": [], "Total": -1 })), Err(DecodeError::MissingTotal));
}

#[test]
fn decode_page_rejects_non_object_body() {
    assert_eq!(decode_page(&json!([])), Err(DecodeError::UnexpectedShape));
}

#[test]
fn decode_listing_accepts_bare_array() {
    let persons = decode_listing(&json!([
        { "firstName": "John", "lastName": "Wick", "birthday": "1964-09-02" },
        { "firstName": "Martin", "lastName": "McFly" }
    ]))
    .expect("listing");
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].full_name(), "John Wick");
}

#[test]
fn decode_listing_accepts_envelope_without_total() {
    let persons = decode_listing(&json!({
        "Data": [{ "firstName": "Sarah", "lastName": "Connor", "birthday": "1965-05-13" }]
    }))
    .expect("listing");
    assert_eq!(persons.len(), 1);
}

#[test]
fn decode_listing_single_object_is_strict() {
    let ok = decode_listing(&json!({ "firstName": "Jane", "lastName": "Smith", "birthday": "1985-08-22" }))
        .expect("single record");
    assert_eq!(ok.len(), 1);

    let err = decode_listing(&json!({ "firstName": "Jane", "birthday": "1985-08-22" })).expect_err("invalid");
    assert!(matches!(err, DecodeError::InvalidRecord(_)));
}

#[test]
fn decode_listing_rejects_scalars() {
    assert_eq!(decode_listing(&json!("persons")), Err(DecodeError::UnexpectedShape));
}
