//! PageInfo struct for rendering and serialization.

use crate::adapter::Adapter;
use crate::error::Result;
use crate::view::{DefaultView, Viewer};
use serde::{Deserialize, Serialize};

/// Page metadata for a paginated response.
///
/// # Example
///
/// ```
/// use pagewise::{DefaultView, Paginator, SliceAdapter};
///
/// let data: Vec<u32> = (1..=45).collect();
/// let adapter = SliceAdapter::new(&data);
/// let mut paginator = Paginator::new(&adapter, 10);
/// paginator.set_page(2);
///
/// let info = DefaultView::new(&paginator).info().unwrap();
/// assert_eq!(info.page, 2);
/// assert_eq!(info.page_nums, 5);
/// assert_eq!(info.prev, Some(1));
/// assert_eq!(info.next, Some(3));
/// assert_eq!(info.pages, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page (clamped)
    pub page: usize,
    /// Records per page
    pub per_page: usize,
    /// Total number of records
    pub total: u64,
    /// Total number of pages
    pub page_nums: usize,
    /// Whether there is more than one page
    pub has_pages: bool,
    /// Whether there are pages before this one
    pub has_prev: bool,
    /// Whether there are pages after this one
    pub has_next: bool,
    /// Previous page number
    pub prev: Option<usize>,
    /// Next page number
    pub next: Option<usize>,
    /// Page window to render
    pub pages: Vec<usize>,
}

impl PageInfo {
    /// Collect page metadata from a view and its paginator
    pub fn from_view<A: Adapter + ?Sized>(view: &DefaultView<'_, '_, A>) -> Result<Self> {
        let paginator = view.paginator();

        Ok(Self {
            page: paginator.page()?,
            per_page: paginator.per_page(),
            total: paginator.nums()?,
            page_nums: paginator.page_nums()?,
            has_pages: paginator.has_pages()?,
            has_prev: paginator.has_prev()?,
            has_next: paginator.has_next()?,
            prev: boundary(view.prev())?,
            next: boundary(view.next())?,
            pages: view.pages()?,
        })
    }

    /// Offset of the first record on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Turn a page-boundary error into `None`, keeping every other error
fn boundary(result: Result<usize>) -> Result<Option<usize>> {
    match result {
        Ok(page) => Ok(Some(page)),
        Err(e) if e.is_navigation() => Ok(None),
        Err(e) => Err(e),
    }
}
