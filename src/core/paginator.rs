//! Offset-based pagination.
//!
//! A cursor is a plain position in the filtered and sorted sequence. If the underlying
//! collection changes between two requests of a paging session, offsets can skip or
//! repeat records; callers that need stable iteration must hold the dataset fixed.

use crate::domain::model::Page;

/// Start and end offsets of a page, plus neighbouring cursors. Pure arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub next_cursor: Option<usize>,
    pub prev_cursor: Option<usize>,
}

impl PageWindow {
    /// `limit` must be positive; the orchestrator rejects anything else before we get here.
    pub fn compute(total: usize, cursor: usize, limit: usize) -> Self {
        debug_assert!(limit > 0, "limit must be positive");

        let upper = cursor.saturating_add(limit);
        let start = cursor.min(total);
        let end = upper.min(total);

        let next_cursor = (upper < total).then_some(upper);
        // Computed even when the cursor is past the end so a client can walk back into range.
        let prev_cursor = (cursor > 0).then(|| cursor.saturating_sub(limit));

        Self {
            start,
            end,
            next_cursor,
            prev_cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Cuts one page out of `items`. `total` is the full length of `items`, never the page size.
pub fn paginate<T: Clone>(items: &[T], cursor: usize, limit: usize) -> Page<T> {
    let window = PageWindow::compute(items.len(), cursor, limit);

    Page {
        data: items[window.start..window.end].to_vec(),
        total: items.len(),
        next_cursor: window.next_cursor,
        prev_cursor: window.prev_cursor,
    }
}
