//! REST helpers for the contacts endpoint.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Other builds: stubs returning an error, since the request is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a [`FetchError`] instead of panics; the directory page turns
//! it into one inline message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use people::load::FetchError;
use people::person::Person;
use people::query::{PersonQuery, persons_url};
use people::wire::PersonPage;

use crate::config::ApiConfig;

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_error() -> FetchError {
    FetchError::Network("not available outside the browser".to_owned())
}

/// Fetch one filtered page: `GET {base}/persons?page=..&pageSize=..[&q=..]`.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-success status, or a body
/// that is not a `{ Data, Total }` envelope.
pub async fn fetch_page(config: &ApiConfig, query: &PersonQuery) -> Result<PersonPage, FetchError> {
    let url = query.url(&config.base_url)?;
    #[cfg(feature = "csr")]
    {
        let body = get_json(url.as_str()).await?;
        Ok(people::wire::decode_page(&body)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(unavailable_error())
    }
}

/// Fetch the full, unpaged listing: `GET {base}/persons`.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-success status, or an
/// unusable body.
pub async fn fetch_all(config: &ApiConfig) -> Result<Vec<Person>, FetchError> {
    let url = persons_url(&config.base_url)?;
    #[cfg(feature = "csr")]
    {
        let body = get_json(url.as_str()).await?;
        Ok(people::wire::decode_listing(&body)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(unavailable_error())
    }
}

#[cfg(feature = "csr")]
async fn get_json(url: &str) -> Result<serde_json::Value, FetchError> {
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
