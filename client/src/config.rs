//! Build-time configuration for the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so settings are captured from
//! the build environment with `option_env!` when Trunk compiles the crate:
//!
//! - `CONTACT_HUB_API_URL`: base URL of the contacts API
//! - `CONTACT_HUB_PAGING`: `server` or `client`
//! - `CONTACT_HUB_DEBOUNCE_MS`: filter debounce delay
//! - `CONTACT_HUB_LOG`: console log level
//!
//! Unusable values fall back to defaults with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use people::pagination::PagingMode;
use people::query::persons_url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Settings for the contacts request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL the `persons` path is joined onto.
    pub base_url: String,
    pub paging: PagingMode,
    pub debounce_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ApiConfig {
    /// Configuration captured at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONTACT_HUB_API_URL"),
            option_env!("CONTACT_HUB_PAGING"),
            option_env!("CONTACT_HUB_DEBOUNCE_MS"),
        )
    }

    /// Build from raw values, substituting defaults for missing or invalid ones.
    pub fn from_values(api_url: Option<&str>, paging: Option<&str>, debounce_ms: Option<&str>) -> Self {
        Self {
            base_url: parse_base_url(api_url),
            paging: parse_paging(paging),
            debounce_ms: parse_debounce_ms(debounce_ms),
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return DEFAULT_API_URL.to_owned();
    };
    match persons_url(raw) {
        Ok(_) => raw.to_owned(),
        Err(e) => {
            log::warn!("ignoring CONTACT_HUB_API_URL: {e}");
            DEFAULT_API_URL.to_owned()
        }
    }
}

fn parse_paging(raw: Option<&str>) -> PagingMode {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return PagingMode::default();
    };
    PagingMode::parse(raw).unwrap_or_else(|| {
        log::warn!("ignoring CONTACT_HUB_PAGING={raw:?}; expected server or client");
        PagingMode::default()
    })
}

fn parse_debounce_ms(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return people::DEFAULT_DEBOUNCE_MS;
    };
    raw.trim().parse::<u32>().unwrap_or_else(|_| {
        log::warn!("ignoring CONTACT_HUB_DEBOUNCE_MS={raw:?}; expected milliseconds");
        people::DEFAULT_DEBOUNCE_MS
    })
}

/// Console log level; `info` unless `CONTACT_HUB_LOG` names another level.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CONTACT_HUB_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
