//! Page arithmetic for the Previous/Next control.

/// Pagination state derived from a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Builds pagination for `found` results at `per_page`, clamping
    /// `current_page` into `[1, max(1, total_pages)]`.
    pub fn new(found: u64, per_page: usize, current_page: usize) -> Self {
        let total_pages = total_pages(found, per_page);
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    /// The control is only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page reached by Previous, if any.
    pub fn previous_page(&self) -> Option<usize> {
        (!self.previous_disabled()).then(|| self.current_page - 1)
    }

    /// Page reached by Next, if any.
    pub fn next_page(&self) -> Option<usize> {
        (!self.next_disabled()).then(|| self.current_page + 1)
    }
}

/// `ceil(found / per_page)`; zero results means zero pages.
pub fn total_pages(found: u64, per_page: usize) -> usize {
    let per_page = per_page.max(1) as u64;
    usize::try_from(found.div_ceil(per_page)).unwrap_or(usize::MAX)
}

/// Clamps `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
