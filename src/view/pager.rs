use crate::error::{LedgerError, Result};

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slice out 1-indexed page `page_number` of `page_size` items, clipped to bounds.
///
/// Page 0 and a page size of 0 both yield an empty slice.
pub fn page<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    if page_size == 0 || page_number == 0 {
        return &[];
    }

    let start = (page_number - 1).saturating_mul(page_size).min(items.len());
    let end = page_number.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items (`ceil(len / page_size)`)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// Page size plus the current-page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    /// Create a pager on page 1; `page_size` is clamped to at least 1
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), current_page: 1 }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Page controls only make sense with more than one page
    pub fn has_controls(&self, len: usize) -> bool {
        self.total_pages(len) > 1
    }

    /// Items on the current page
    pub fn current<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_size, self.current_page)
    }

    /// Move the cursor to `page_number`; selecting the current page again is a no-op.
    ///
    /// An empty list still has a page 1 (showing nothing).
    pub fn select(&mut self, page_number: usize, len: usize) -> Result<()> {
        let last = self.total_pages(len).max(1);
        if page_number == 0 || page_number > last {
            return Err(LedgerError::user_input(format!(
                "Page {} does not exist (1-{})",
                page_number, last
            )));
        }
        self.current_page = page_number;
        Ok(())
    }

    /// Pull the cursor back inside the page range after the item count shrank
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.min(self.total_pages(len).max(1));
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.step(self.current_page + 1, len)
    }

    pub fn previous(&mut self, len: usize) -> bool {
        self.step(self.current_page.saturating_sub(1), len)
    }

    pub fn last(&mut self, len: usize) -> bool {
        self.step(self.total_pages(len).max(1), len)
    }

    pub fn first(&mut self, len: usize) -> bool {
        self.step(1, len)
    }

    /// Select if valid; returns whether the cursor moved
    fn step(&mut self, page_number: usize, len: usize) -> bool {
        let before = self.current_page;
        self.select(page_number, len).is_ok() && before != self.current_page
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
