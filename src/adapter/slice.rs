//! In-memory slice adapter

use super::{window_bounds, Adapter};
use crate::error::Result;

/// Paginates a borrowed slice of records.
///
/// The sort clause is accepted but not applied: records come back in slice
/// order. Sort the slice up front, or use [`super::JsonAdapter`], when the
/// order matters.
#[derive(Debug, Clone, Copy)]
pub struct SliceAdapter<'a, T> {
    source: &'a [T],
}

impl<'a, T> SliceAdapter<'a, T> {
    /// Create a new slice adapter
    pub fn new(source: &'a [T]) -> Self {
        Self { source }
    }

    /// Number of records as a plain `usize`
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the slice is empty
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<T: Clone> Adapter for SliceAdapter<'_, T> {
    type Item = T;

    fn count(&self) -> Result<u64> {
        Ok(self.source.len() as u64)
    }

    fn fetch(&self, offset: usize, length: usize, _sort: &str, out: &mut Vec<T>) -> Result<()> {
        let (start, end) = window_bounds(self.source.len(), offset, length);

        out.clear();
        out.extend_from_slice(&self.source[start..end]);
        Ok(())
    }
}
