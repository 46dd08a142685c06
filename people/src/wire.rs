//! Response envelopes returned by the contacts endpoint.
//!
//! The paged endpoint answers `{ "Data": Person[], "Total": number }`; the
//! unpaged listing answers a bare `Person[]`. Both are decoded leniently:
//! records that fail validation are logged and dropped instead of failing
//! the whole response.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::person::Person;

/// Error returned when a response body has an unusable shape.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The body is neither an array, an object, nor a page envelope.
    #[error("expected a person list, a person object or a page envelope")]
    UnexpectedShape,
    /// A single-object body failed validation.
    #[error("invalid person record: {0}")]
    InvalidRecord(String),
    /// The page envelope is missing `Total` or it is not a count.
    #[error("page envelope has no valid Total")]
    MissingTotal,
}

/// One page of search results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PersonPage {
    #[serde(rename = "Data")]
    pub data: Vec<Person>,
    #[serde(rename = "Total")]
    pub total: usize,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(rename = "Data", default)]
    data: Option<Value>,
    #[serde(rename = "Total")]
    total: Option<usize>,
}

/// Decode a `{ Data, Total }` page envelope.
///
/// # Errors
///
/// Returns [`DecodeError::MissingTotal`] when `Total` is absent or not a
/// non-negative integer, and [`DecodeError::UnexpectedShape`] when `Data`
/// is not a list.
pub fn decode_page(value: &Value) -> Result<PersonPage, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::UnexpectedShape);
    }
    let raw = RawPage::deserialize(value).map_err(|_| DecodeError::MissingTotal)?;
    let total = raw.total.ok_or(DecodeError::MissingTotal)?;
    let data = match raw.data {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => decode_records(&items),
        Some(_) => return Err(DecodeError::UnexpectedShape),
    };
    Ok(PersonPage { data, total })
}

/// Decode a full, unpaged listing.
///
/// Accepts a bare array, a page envelope (its `Data` is used and `Total`
/// ignored) or a single person object.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidRecord`] when a single-object body fails
/// validation and [`DecodeError::UnexpectedShape`] for scalars.
pub fn decode_listing(value: &Value) -> Result<Vec<Person>, DecodeError> {
    match value {
        Value::Array(items) => Ok(decode_records(items)),
        Value::Object(map) if map.contains_key("Data") => match &map["Data"] {
            Value::Array(items) => Ok(decode_records(items)),
            Value::Null => Ok(Vec::new()),
            _ => Err(DecodeError::UnexpectedShape),
        },
        Value::Object(_) => Person::deserialize(value)
            .map(|person| vec![person])
            .map_err(|e| DecodeError::InvalidRecord(e.to_string())),
        _ => Err(DecodeError::UnexpectedShape),
    }
}

fn decode_records(items: &[Value]) -> Vec<Person> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match Person::deserialize(item) {
            Ok(person) => Some(person),
            Err(e) => {
                log::warn!("skipping invalid person record at index {index}: {e}");
                None
            }
        })
        .collect()
}
