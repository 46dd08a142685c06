//! Networking for the contacts REST endpoint.

pub mod api;
