//! Contact directory model and request helpers for Contact Hub.
//!
//! This crate is UI-framework agnostic: it owns the person record and its wire
//! decoding, query-string construction, local filtering, pagination math,
//! debounce supersession and the three-state load model. The `client` crate
//! renders on top of it.

pub mod debounce;
pub mod filter;
pub mod load;
pub mod pagination;
pub mod person;
pub mod query;
pub mod wire;

pub use debounce::{DEFAULT_DEBOUNCE_MS, Debounce, Ticket};
pub use filter::apply_filter;
pub use load::{FetchError, LoadState, RequestSeq, RequestToken};
pub use pagination::{PagingMode, Pagination, ROWS_PER_PAGE_OPTIONS};
pub use person::{Person, PersonError};
pub use query::{PersonFilter, PersonQuery, QueryError};
pub use wire::{DecodeError, PersonPage};
