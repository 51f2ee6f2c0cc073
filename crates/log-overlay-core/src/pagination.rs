//! Page window reported by the host

/// Current page window. Always satisfies `page < total_pages` and
/// `total_pages >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    page: usize,
    total_pages: usize,
    total: usize,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::single(0)
    }
}

impl PaginationMeta {
    /// Normalize a host-reported window into a valid one
    pub fn new(page: usize, total_pages: usize, total: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.min(total_pages - 1),
            total_pages,
            total,
        }
    }

    /// Single-page window holding `total` entries (search results)
    pub fn single(total: usize) -> Self {
        Self::new(0, 1, total)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Target page for a "previous" request, if one exists
    pub fn prev_page(&self) -> Option<usize> {
        self.page.checked_sub(1)
    }

    /// Target page for a "next" request, if one exists
    pub fn next_page(&self) -> Option<usize> {
        let next = self.page + 1;
        (next < self.total_pages).then_some(next)
    }

    /// One-based page label, e.g. `Page 1 / 2 (50)`
    pub fn label(&self) -> String {
        format!(
            "Page {} / {} ({})",
            self.page + 1,
            self.total_pages,
            self.total
        )
    }
}
