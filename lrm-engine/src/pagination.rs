use std::ops::Range;

/// Cards shown per page.
pub const ITEMS_PER_PAGE: usize = 6;

/// Number of pages needed for `len` items: `ceil(len / page_size)`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of 1-based page `page`, clamped to `len`.
///
/// Pages past the end yield an empty range.
pub fn page_range(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Current page position over a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    len: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            current: 1,
            len,
            page_size,
        }
    }

    /// 1-based current page. Stays 1 for an empty list.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        total_pages(self.len, self.page_size)
    }

    pub fn range(&self) -> Range<usize> {
        page_range(self.len, self.page_size, self.current)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total()
    }

    /// Advance one page. Returns false (and does nothing) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one page. Returns false (and does nothing) on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `page`, clamped into `1..=total`. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total().max(1));
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Back to page 1 for a list of a new length. Returns whether the page changed.
    pub fn reset(&mut self, len: usize) -> bool {
        self.len = len;
        let changed = self.current != 1;
        self.current = 1;
        changed
    }
}
