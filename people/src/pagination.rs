//! Table pagination state and page math.
//!
//! DESIGN
//! ======
//! Pages are 0-based here, matching what the pagination control displays
//! and emits; [`Pagination::to_api_page`] converts to the endpoint's 1-based
//! numbering at the request boundary.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Choices offered by the rows-per-page selector.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Rows per page before the user picks another option.
pub const DEFAULT_ROWS_PER_PAGE: usize = ROWS_PER_PAGE_OPTIONS[0];

/// Where paging happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagingMode {
    /// The endpoint filters and pages; the client renders `Data` and trusts `Total`.
    #[default]
    Server,
    /// The endpoint returns the full list; the client filters and pages it.
    Client,
}

impl PagingMode {
    /// Parse `"server"` / `"client"`, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "server" => Some(Self::Server),
            "client" => Some(Self::Client),
            _ => None,
        }
    }
}

/// Current page and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and go back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        if self.rows_per_page == 0 {
            return 0;
        }
        total.div_ceil(self.rows_per_page)
    }

    #[must_use]
    pub fn last_page(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn has_next(&self, total: usize) -> bool {
        self.page.saturating_add(1).saturating_mul(self.rows_per_page) < total
    }

    /// Page the previous-page control should emit, if any.
    #[must_use]
    pub fn prev_page(&self) -> Option<usize> {
        self.page.checked_sub(1)
    }

    /// Page the next-page control should emit, if any.
    #[must_use]
    pub fn next_page(&self, total: usize) -> Option<usize> {
        self.has_next(total).then_some(self.page + 1)
    }

    /// Pull an out-of-range page back to the last page. Returns whether the
    /// page changed.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let last = self.last_page(total);
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }

    /// 1-based page number for the endpoint.
    #[must_use]
    pub fn to_api_page(&self) -> usize {
        self.page + 1
    }

    /// `"1–5 of 12"` style label; `"0–0 of 0"` when there is nothing to show.
    #[must_use]
    pub fn range_label(&self, total: usize) -> String {
        let start = self.page.saturating_mul(self.rows_per_page);
        if total == 0 || start >= total {
            return format!("0–0 of {total}");
        }
        let end = start.saturating_add(self.rows_per_page).min(total);
        format!("{}–{end} of {total}", start + 1)
    }

    /// Rows of the current page out of a fully materialized list.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.rows_per_page).min(items.len());
        &items[start..end]
    }
}

/// Parse a rows-per-page `<select>` value, accepting only offered options.
#[must_use]
pub fn parse_rows_per_page(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|rows| ROWS_PER_PAGE_OPTIONS.contains(rows))
}
