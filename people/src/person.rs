//! Person record as served by the contacts endpoint.
//!
//! DESIGN
//! ======
//! Records are decoded through a permissive raw shape and then validated, so
//! a missing name or birthday surfaces as a typed [`PersonError`] rather than
//! an opaque serde message. Only the calendar date of a birthday is kept.

#[cfg(test)]
#[path = "person_test.rs"]
mod person_test;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Calendar date format used on the wire and by browser date inputs.
pub(crate) const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Placeholder shown for optional fields a record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Error returned when a record fails validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PersonError {
    /// First or last name is absent or blank.
    #[error("missing required field(s) (firstName, lastName)")]
    MissingName,
    /// Birthday is absent or the zero timestamp.
    #[error("birthday field is missing")]
    MissingBirthday,
    /// Birthday is present but neither an ISO date nor an RFC 3339 timestamp.
    #[error("birthday field is invalid: {0}")]
    InvalidBirthday(String),
}

/// A contact record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPerson", into = "RawPerson")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub birthday: Date,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl Person {
    /// `"{first} {last}"`, as shown in the detail dialog title.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Row identity for table rendering; the endpoint exposes no id.
    #[must_use]
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.first_name, self.last_name)
    }

    /// Address for display, `N/A` when absent.
    #[must_use]
    pub fn address_or_na(&self) -> &str {
        display_or_na(self.address.as_deref())
    }

    /// Phone number for display, `N/A` when absent.
    #[must_use]
    pub fn phone_or_na(&self) -> &str {
        display_or_na(self.phone_number.as_deref())
    }

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::MissingName`] when either name is blank.
    pub fn validate(&self) -> Result<(), PersonError> {
        check_names(&self.first_name, &self.last_name)
    }
}

/// Map an absent or blank optional field to `N/A`.
#[must_use]
pub fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Birthday in table/dialog display form, `DD.MM.YYYY`.
#[must_use]
pub fn format_birthday(date: Date) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), u8::from(date.month()), date.year())
}

/// Birthday in wire form, `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse a birthday as sent by the backend.
///
/// Accepts a bare `YYYY-MM-DD` date or a full RFC 3339 timestamp; the zero
/// timestamp (`0001-01-01T00:00:00Z`) counts as missing.
///
/// # Errors
///
/// Returns [`PersonError::MissingBirthday`] for blank or zero values and
/// [`PersonError::InvalidBirthday`] for anything unparseable.
pub fn parse_birthday(raw: &str) -> Result<Date, PersonError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PersonError::MissingBirthday);
    }
    let date = match Date::parse(raw, ISO_DATE) {
        Ok(date) => date,
        Err(_) => OffsetDateTime::parse(raw, &Rfc3339)
            .map(OffsetDateTime::date)
            .map_err(|_| PersonError::InvalidBirthday(raw.to_owned()))?,
    };
    if is_zero_date(date) {
        return Err(PersonError::MissingBirthday);
    }
    Ok(date)
}

fn is_zero_date(date: Date) -> bool {
    date.year() == 1 && date.month() == Month::January && date.day() == 1
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerson {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
}

impl TryFrom<RawPerson> for Person {
    type Error = PersonError;

    fn try_from(raw: RawPerson) -> Result<Self, Self::Error> {
        let first_name = raw.first_name.unwrap_or_default();
        let last_name = raw.last_name.unwrap_or_default();
        check_names(&first_name, &last_name)?;
        Ok(Self {
            first_name,
            last_name,
            birthday: parse_birthday(raw.birthday.as_deref().unwrap_or_default())?,
            address: non_blank(raw.address),
            phone_number: non_blank(raw.phone_number),
        })
    }
}

impl From<Person> for RawPerson {
    fn from(person: Person) -> Self {
        Self {
            first_name: Some(person.first_name),
            last_name: Some(person.last_name),
            birthday: Some(iso_date(person.birthday)),
            address: person.address,
            phone_number: person.phone_number,
        }
    }
}

fn check_names(first: &str, last: &str) -> Result<(), PersonError> {
    if first.is_empty() || last.is_empty() {
        return Err(PersonError::MissingName);
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
