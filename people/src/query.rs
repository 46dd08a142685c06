//! Search filter and request URL construction for the contacts endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client commits a [`PersonFilter`] after the debounce delay and turns
//! it, together with the current page, into a [`PersonQuery`]. Only the
//! parameters that carry a value are put on the wire.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use time::Date;
use url::Url;

use crate::person::{ISO_DATE, iso_date};

/// Path segment of the contacts endpoint, relative to the API base URL.
pub const PERSONS_PATH: &str = "persons";

/// Error returned when a request URL cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The configured base URL does not parse.
    #[error("invalid API base url {url:?}: {reason}")]
    InvalidBase { url: String, reason: String },
    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("API base url {0:?} cannot carry a path")]
    CannotBeABase(String),
}

/// User-entered search criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonFilter {
    /// Free text matched against first and last name.
    pub text: String,
    /// Inclusive lower birthday bound.
    pub birthday_from: Option<Date>,
    /// Inclusive upper birthday bound.
    pub birthday_to: Option<Date>,
}

impl PersonFilter {
    /// Search text without surrounding whitespace.
    #[must_use]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty() && self.birthday_from.is_none() && self.birthday_to.is_none()
    }

    /// True when both bounds are set and `from` lies after `to`.
    #[must_use]
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.birthday_from, self.birthday_to), (Some(from), Some(to)) if from > to)
    }

    /// Copy with the text trimmed; two drafts that differ only in
    /// surrounding whitespace normalize to the same filter.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            text: self.trimmed_text().to_owned(),
            birthday_from: self.birthday_from,
            birthday_to: self.birthday_to,
        }
    }
}

/// One paged search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonQuery {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub filter: PersonFilter,
}

impl PersonQuery {
    /// Query-string pairs in wire order: `page`, `pageSize`, then `q`,
    /// `birthdayFrom` and `birthdayTo` when set.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        let text = self.filter.trimmed_text();
        if !text.is_empty() {
            params.push(("q", text.to_owned()));
        }
        if let Some(from) = self.filter.birthday_from {
            params.push(("birthdayFrom", iso_date(from)));
        }
        if let Some(to) = self.filter.birthday_to {
            params.push(("birthdayTo", iso_date(to)));
        }
        params
    }

    /// Full request URL under `base`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when `base` is not a usable URL.
    pub fn url(&self, base: &str) -> Result<Url, QueryError> {
        let mut url = persons_url(base)?;
        url.query_pairs_mut().extend_pairs(self.params());
        Ok(url)
    }
}

/// URL of the contacts endpoint under `base`, without a query string.
///
/// A base with a path prefix (`https://host/api`) keeps its prefix.
///
/// # Errors
///
/// Returns [`QueryError`] when `base` is not a usable URL.
pub fn persons_url(base: &str) -> Result<Url, QueryError> {
    let mut url = Url::parse(base.trim()).map_err(|e| QueryError::InvalidBase {
        url: base.to_owned(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(QueryError::CannotBeABase(base.to_owned()));
    }
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(PERSONS_PATH).map_err(|e| QueryError::InvalidBase {
        url: base.to_owned(),
        reason: e.to_string(),
    })
}

/// Parse the value of an `<input type="date">`.
///
/// Browsers report `YYYY-MM-DD` or an empty string; anything else yields
/// `None` so a half-typed date never reaches the wire.
#[must_use]
pub fn parse_date_input(value: &str) -> Option<Date> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Date::parse(value, ISO_DATE).ok()
}

/// Render an optional date back into an `<input type="date">` value.
#[must_use]
pub fn date_input_value(date: Option<Date>) -> String {
    date.map(iso_date).unwrap_or_default()
}
