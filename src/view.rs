//! Page window for rendering navigation links
//!
//! [`DefaultView`] produces the Google-style list of page numbers around the
//! current page: `1 2 3 [4] 5 6 7 8 9 10`.

use crate::adapter::Adapter;
use crate::error::Result;
use crate::page_info::PageInfo;
use crate::paginator::Paginator;

/// Half-width of the page window when none is configured
pub const DEFAULT_PROXIMITY: usize = 5;

/// Something that can list the page numbers to render
pub trait Viewer {
    /// Page numbers to render, ascending
    fn pages(&self) -> Result<Vec<usize>>;
}

/// Google-style page window over a [`Paginator`]
#[derive(Debug)]
pub struct DefaultView<'p, 'a, A: Adapter + ?Sized> {
    paginator: &'p Paginator<'a, A>,
    proximity: usize,
}

impl<'p, 'a, A: Adapter + ?Sized> DefaultView<'p, 'a, A> {
    /// Create a view with [`DEFAULT_PROXIMITY`]
    pub fn new(paginator: &'p Paginator<'a, A>) -> Self {
        Self::with_proximity(paginator, DEFAULT_PROXIMITY)
    }

    /// Create a view showing up to `2 * proximity` pages (at least 1)
    pub fn with_proximity(paginator: &'p Paginator<'a, A>, proximity: usize) -> Self {
        Self {
            paginator,
            proximity: proximity.max(1),
        }
    }

    /// The paginator being rendered
    pub fn paginator(&self) -> &'p Paginator<'a, A> {
        self.paginator
    }

    /// Half-width of the window
    pub fn proximity(&self) -> usize {
        self.proximity
    }

    /// Next page number
    pub fn next(&self) -> Result<usize> {
        self.paginator.next_page()
    }

    /// Previous page number
    pub fn prev(&self) -> Result<usize> {
        self.paginator.prev_page()
    }

    /// Current page number
    pub fn current(&self) -> Result<usize> {
        self.paginator.page()
    }

    /// Last page number
    pub fn last(&self) -> Result<usize> {
        self.paginator.page_nums()
    }

    /// Snapshot of all page metadata, window included
    pub fn info(&self) -> Result<PageInfo> {
        PageInfo::from_view(self)
    }
}

impl<A: Adapter + ?Sized> Viewer for DefaultView<'_, '_, A> {
    fn pages(&self) -> Result<Vec<usize>> {
        if !self.paginator.has_pages()? {
            return Ok(Vec::new());
        }

        let last = self.paginator.page_nums()?;
        let current = self.paginator.page()?;

        let length = self.proximity.saturating_mul(2).min(last);
        let left = length / 2;
        let right = if length % 2 == 0 {
            (length / 2).saturating_sub(1)
        } else {
            left
        };

        // Window anchored at the first page near the start, at the last
        // page near the end, centered otherwise.
        let (mut start, mut end) = if current <= left {
            (1, length)
        } else {
            (current - left, current + right)
        };

        if end > last {
            end = last;
            start = last + 1 - length;
        }

        Ok((start..=end).collect())
    }
}
