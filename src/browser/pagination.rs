//! Page bookkeeping for incremental loading

/// Largest page size the catalog accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Tracks which page was last committed and whether more may exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: u32,
    /// Length of the last settled page; `None` before anything settled
    last_page_len: Option<usize>,
    total_count: Option<u64>,
    page_count: Option<u64>,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            last_page_len: None,
            total_count: None,
            page_count: None,
        }
    }

    /// Back to page 1 with no counts, for a fresh search
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.last_page_len = None;
        self.total_count = None;
        self.page_count = None;
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1)
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn page_count(&self) -> Option<u64> {
        self.page_count
    }

    /// A full last page means the catalog may have more. A short or empty
    /// page (or nothing loaded yet) means it does not.
    pub fn may_have_more(&self) -> bool {
        self.last_page_len == Some(self.page_size as usize)
    }

    /// Record a settled page. The page number is only committed when cards
    /// came back; header counts only overwrite when present.
    pub fn record(&mut self, page: u32, len: usize, total_count: Option<u64>, count: Option<u64>) {
        if len > 0 {
            self.current_page = page;
        }
        self.last_page_len = Some(len);
        if total_count.is_some() {
            self.total_count = total_count;
        }
        if count.is_some() {
            self.page_count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(Pagination::new(0).page_size(), 1);
        assert_eq!(Pagination::new(500).page_size(), MAX_PAGE_SIZE);
        assert_eq!(Pagination::new(20).page_size(), 20);
    }

    #[test]
    fn full_page_allows_more() {
        let mut pages = Pagination::new(20);
        assert!(!pages.may_have_more());

        pages.record(1, 20, Some(45), Some(20));
        assert!(pages.may_have_more());
        assert_eq!(pages.next_page(), 2);

        pages.record(2, 20, None, None);
        assert_eq!(pages.current_page(), 2);
        assert_eq!(pages.total_count(), Some(45));

        pages.record(3, 5, Some(45), Some(5));
        assert!(!pages.may_have_more());
        assert_eq!(pages.page_count(), Some(5));
    }

    #[test]
    fn empty_page_is_not_committed() {
        let mut pages = Pagination::new(10);
        pages.record(1, 10, None, None);
        pages.record(2, 0, None, None);
        assert_eq!(pages.current_page(), 1);
        assert!(!pages.may_have_more());
    }

    #[test]
    fn reset_clears_counts() {
        let mut pages = Pagination::new(10);
        pages.record(1, 10, Some(30), Some(10));
        pages.record(2, 10, Some(30), Some(10));
        pages.reset();
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.total_count(), None);
        assert_eq!(pages.page_count(), None);
        assert!(!pages.may_have_more());
    }
}
