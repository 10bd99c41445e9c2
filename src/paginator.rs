//! Page-number paginator
//!
//! Tracks the requested page and sort for one query, caches the total
//! record count, and turns the page number into an `offset`/`limit` pair
//! for the adapter.

use crate::adapter::Adapter;
use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::types::SortOrder;
use std::cell::Cell;
use std::fmt;

/// Records per page used when the caller asks for zero
pub const DEFAULT_PER_PAGE: usize = 10;

/// Sort applied until [`Paginator::set_sort`] is called
pub const DEFAULT_SORT: &str = "+id";

/// Paginates the records of a single adapter.
///
/// The requested page is stored as given and clamped to the page count
/// every time it is read, so a page set before the count is known still
/// resolves correctly. The total count is fetched lazily, at most once.
///
/// Not `Sync`: use one paginator per request.
pub struct Paginator<'a, A: Adapter + ?Sized> {
    adapter: &'a A,
    per_page: usize,
    page: usize,
    sort: String,
    total: Cell<Option<u64>>,
}

impl<'a, A: Adapter + ?Sized> Paginator<'a, A> {
    /// Create a new paginator; a `per_page` of zero falls back to [`DEFAULT_PER_PAGE`]
    pub fn new(adapter: &'a A, per_page: usize) -> Self {
        let per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };

        Self {
            adapter,
            per_page,
            page: 1,
            sort: DEFAULT_SORT.to_string(),
            total: Cell::new(None),
        }
    }

    /// Create a paginator using the page size and sort from a config
    pub fn with_config(adapter: &'a A, config: &PaginationConfig) -> Self {
        let mut paginator = Self::new(adapter, config.per_page);
        paginator.set_sort(config.sort.clone());
        paginator
    }

    /// The adapter this paginator reads from
    pub fn adapter(&self) -> &'a A {
        self.adapter
    }

    /// Set the requested page. Anything below 1 is treated as 1.
    pub fn set_page(&mut self, page: i64) {
        self.page = if page <= 0 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX)
        };
    }

    /// Current page, clamped to the page count
    pub fn page(&self) -> Result<usize> {
        let page_nums = self.page_nums()?;
        Ok(self.page.min(page_nums))
    }

    /// Set the raw sort spec (`+field` or `-field`); validated by [`Paginator::sort`]
    pub fn set_sort(&mut self, sort: impl Into<String>) {
        self.sort = sort.into();
    }

    /// Raw sort spec as last set
    pub fn raw_sort(&self) -> &str {
        &self.sort
    }

    /// Sort clause handed to the adapter, e.g. `name desc`
    pub fn sort(&self) -> Result<String> {
        SortOrder::parse(&self.sort).map(|order| order.to_string())
    }

    /// Total number of records.
    ///
    /// The first successful call asks the adapter and caches the answer.
    /// Errors are returned as-is and not cached.
    pub fn nums(&self) -> Result<u64> {
        if let Some(total) = self.total.get() {
            return Ok(total);
        }

        let total = self.adapter.count()?;
        tracing::debug!(total, "fetched record count");
        self.total.set(Some(total));
        Ok(total)
    }

    /// Total number of pages, at least 1 even for an empty source
    pub fn page_nums(&self) -> Result<usize> {
        let total = self.nums()?;
        let pages = total.div_ceil(self.per_page as u64).max(1);
        Ok(usize::try_from(pages).unwrap_or(usize::MAX))
    }

    /// Whether there is more than one page
    pub fn has_pages(&self) -> Result<bool> {
        Ok(self.nums()? > self.per_page as u64)
    }

    /// Whether the current page is not the last one
    pub fn has_next(&self) -> Result<bool> {
        Ok(self.page()? < self.page_nums()?)
    }

    /// Whether the current page is not the first one
    pub fn has_prev(&self) -> Result<bool> {
        Ok(self.page()? > 1)
    }

    /// Number of the next page, or [`Error::NoNextPage`] on the last page
    pub fn next_page(&self) -> Result<usize> {
        if !self.has_next()? {
            return Err(Error::NoNextPage);
        }

        Ok(self.page()? + 1)
    }

    /// Number of the previous page, or [`Error::NoPrevPage`] on the first page
    pub fn prev_page(&self) -> Result<usize> {
        if !self.has_prev()? {
            return Err(Error::NoPrevPage);
        }

        Ok(self.page()? - 1)
    }

    /// Records per page
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Zero-based index of the first record on the current page
    pub fn offset(&self) -> Result<usize> {
        Ok((self.page()? - 1).saturating_mul(self.per_page))
    }

    /// Fetch the current page into `out`, replacing its contents
    pub fn results_into(&self, out: &mut Vec<A::Item>) -> Result<()> {
        let offset = self.offset()?;
        let sort = self.sort()?;

        tracing::debug!(offset, limit = self.per_page, %sort, "fetching page");
        self.adapter.fetch(offset, self.per_page, &sort, out)
    }

    /// Fetch the current page
    pub fn results(&self) -> Result<Vec<A::Item>> {
        let mut out = Vec::with_capacity(self.per_page);
        self.results_into(&mut out)?;
        Ok(out)
    }
}

impl<A: Adapter + ?Sized> fmt::Debug for Paginator<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("per_page", &self.per_page)
            .field("page", &self.page)
            .field("sort", &self.sort)
            .field("total", &self.total.get())
            .finish_non_exhaustive()
    }
}
