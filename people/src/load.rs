//! Three-state load model and request supersession.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of the single contacts request collapses into one
//! [`FetchError`], rendered inline as [`FetchError::user_message`]. There is
//! no retry; the next filter or page change issues a fresh request.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::query::QueryError;
use crate::wire::DecodeError;

/// Failure of the contacts request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request URL could not be built from configuration.
    #[error("invalid request: {0}")]
    Url(String),
}

impl FetchError {
    /// Inline message shown in place of the table.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Failed to load contacts: {self}")
    }
}

impl From<DecodeError> for FetchError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<QueryError> for FetchError {
    fn from(err: QueryError) -> Self {
        Self::Url(err.to_string())
    }
}

/// What the results area renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.user_message()),
        }
    }
}

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues request tokens; only the newest token's response is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
