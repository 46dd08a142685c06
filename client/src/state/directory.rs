//! Contact directory state: filters, paging, results and the open dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DirectoryPage` owns one `RwSignal<DirectoryState>`. User input calls the
//! transition methods below; those that return `true` ask the page to issue
//! a request, whose outcome comes back through `finish_*` / `fail_load`
//! tagged with the token from `begin_load`. Responses for superseded tokens
//! are dropped.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use people::filter::apply_filter;
use people::load::{FetchError, LoadState, RequestSeq, RequestToken};
use people::pagination::{PagingMode, Pagination};
use people::person::Person;
use people::query::{PersonFilter, PersonQuery};
use people::wire::PersonPage;

/// Rows currently on screen and the size of the full result set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Loaded {
    pub rows: Vec<Person>,
    pub total: usize,
}

/// Request the page should issue after `begin_load`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadRequest {
    /// One server-side page.
    Page(PersonQuery),
    /// The full unpaged listing, filtered and paged locally.
    Listing,
}

#[derive(Clone, Debug)]
pub struct DirectoryState {
    /// Filter as typed; committed after the debounce delay.
    pub draft: PersonFilter,
    /// Filter the current results were requested with.
    pub applied: PersonFilter,
    pub pagination: Pagination,
    pub paging: PagingMode,
    pub load: LoadState<Loaded>,
    /// Person shown in the detail dialog.
    pub selected: Option<Person>,
    /// Client paging only: every match for `applied`, sorted.
    matched: Option<Vec<Person>>,
    requests: RequestSeq,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(PagingMode::default())
    }
}

impl DirectoryState {
    pub fn new(paging: PagingMode) -> Self {
        Self {
            draft: PersonFilter::default(),
            applied: PersonFilter::default(),
            pagination: Pagination::default(),
            paging,
            load: LoadState::Loading,
            selected: None,
            matched: None,
            requests: RequestSeq::default(),
        }
    }

    /// Commit a debounced filter. Returns whether a request is needed.
    ///
    /// A filter equal to the applied one is a no-op unless the last request
    /// failed, in which case committing it again retries.
    pub fn commit_filter(&mut self, filter: PersonFilter) -> bool {
        let filter = filter.normalized();
        if filter == self.applied && self.load.error().is_none() {
            return false;
        }
        self.applied = filter;
        self.pagination.reset();
        self.matched = None;
        true
    }

    /// Move to `page` (0-based). Returns whether a request is needed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == self.pagination.page {
            return false;
        }
        self.pagination.set_page(page);
        !self.reslice()
    }

    /// Change the page size. Returns whether a request is needed.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> bool {
        if rows_per_page == self.pagination.rows_per_page {
            return false;
        }
        self.pagination.set_rows_per_page(rows_per_page);
        !self.reslice()
    }

    /// Paged query for the applied filter and current page.
    pub fn query(&self) -> PersonQuery {
        PersonQuery {
            page: self.pagination.to_api_page(),
            page_size: self.pagination.rows_per_page,
            filter: self.applied.clone(),
        }
    }

    /// Enter the loading state and describe the request to issue.
    pub fn begin_load(&mut self) -> (RequestToken, LoadRequest) {
        self.load = LoadState::Loading;
        let token = self.requests.issue();
        let request = match self.paging {
            PagingMode::Server => LoadRequest::Page(self.query()),
            PagingMode::Client => LoadRequest::Listing,
        };
        (token, request)
    }

    /// Apply a server page. Returns `true` when the requested page turned
    /// out to be past the end and was clamped, so the page must be refetched.
    pub fn finish_page(&mut self, token: RequestToken, page: PersonPage) -> bool {
        if !self.requests.is_latest(token) {
            return false;
        }
        if page.data.is_empty() && self.pagination.clamp_to(page.total) {
            return true;
        }
        self.load = LoadState::Ready(Loaded {
            rows: page.data,
            total: page.total,
        });
        false
    }

    /// Apply a full listing: filter, sort and page it locally.
    pub fn finish_listing(&mut self, token: RequestToken, persons: Vec<Person>) {
        if !self.requests.is_latest(token) {
            return;
        }
        let matched = apply_filter(&persons, &self.applied);
        self.pagination.clamp_to(matched.len());
        self.matched = Some(matched);
        self.reslice();
    }

    pub fn fail_load(&mut self, token: RequestToken, err: &FetchError) {
        if !self.requests.is_latest(token) {
            return;
        }
        self.load = LoadState::Failed(err.user_message());
    }

    pub fn select(&mut self, person: Person) {
        self.selected = Some(person);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Rows of the current page, empty unless loaded.
    pub fn rows(&self) -> Vec<Person> {
        self.load.ready().map(|l| l.rows.clone()).unwrap_or_default()
    }

    /// Size of the full result set, zero unless loaded.
    pub fn total(&self) -> usize {
        self.load.ready().map_or(0, |l| l.total)
    }

    /// Rebuild the visible page from locally held matches. Returns `false`
    /// when there is nothing local to page through.
    fn reslice(&mut self) -> bool {
        let Some(matched) = &self.matched else {
            return false;
        };
        self.load = LoadState::Ready(Loaded {
            rows: self.pagination.slice(matched).to_vec(),
            total: matched.len(),
        });
        true
    }
}
