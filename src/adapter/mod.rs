//! Adapter module
//!
//! Supports: in-memory slices, JSON arrays (see [`crate::database`] for DuckDB)
//!
//! # Overview
//!
//! An adapter is the data source a [`crate::Paginator`] reads from. It only
//! has to answer two questions: how many records exist, and which records
//! live in a given `offset`/`length` window under a given sort.

mod json;
mod slice;

pub use json::JsonAdapter;
pub use slice::SliceAdapter;

use crate::error::Result;

/// Core trait for paginated data sources
pub trait Adapter {
    /// Record type produced by [`Adapter::fetch`]
    type Item;

    /// Total number of records in the backing collection
    fn count(&self) -> Result<u64>;

    /// Replace the contents of `out` with up to `length` records starting at `offset`.
    ///
    /// `sort` is a `<field> asc|desc` clause. When `offset + length` runs past
    /// the end of the collection only the remaining tail is written, which
    /// may be empty.
    fn fetch(
        &self,
        offset: usize,
        length: usize,
        sort: &str,
        out: &mut Vec<Self::Item>,
    ) -> Result<()>;
}

impl<A: Adapter + ?Sized> Adapter for Box<A> {
    type Item = A::Item;

    fn count(&self) -> Result<u64> {
        (**self).count()
    }

    fn fetch(
        &self,
        offset: usize,
        length: usize,
        sort: &str,
        out: &mut Vec<Self::Item>,
    ) -> Result<()> {
        (**self).fetch(offset, length, sort, out)
    }
}

/// Resolve the `[start, end)` range of a window over `len` records
pub(crate) fn window_bounds(len: usize, offset: usize, length: usize) -> (usize, usize) {
    let start = offset.min(len);
    let end = start.saturating_add(length).min(len);
    (start, end)
}

#[cfg(test)]
mod tests;
