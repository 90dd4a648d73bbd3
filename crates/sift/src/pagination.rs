//! Page navigation over an ordered collection.
//!
//! [`Pagination`] holds the current page and page size, and derives
//! everything else (page count, slice bounds, navigation flags) from the
//! size of the collection it was last told about.
//!
//! The current page is always clamped into `[1, max(1, total_pages)]`.
//! Navigation past either end is a no-op rather than an error.
//!
//! # Collection versions
//!
//! When the collection being paged changes identity, for instance because
//! the search query changed, the old page number is usually meaningless.
//! [`Pagination::sync`] takes a version token alongside the new size and
//! returns to page 1 whenever the token differs from the previous one.
//! [`Pagination::set_total`] only clamps.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::error::{Result, SiftError};

/// Default page size for list views.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Page state for one list view.
///
/// # Example
///
/// ```
/// use sift::Pagination;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let mut pages = Pagination::new(10)?;
/// pages.set_total(items.len());
///
/// assert_eq!(pages.total_pages(), 3);
/// assert_eq!(pages.current_items(&items), &items[0..10]);
///
/// pages.go_to_page(99);
/// assert_eq!(pages.current_page(), 3);
/// assert_eq!(pages.current_items(&items), &[21, 22, 23, 24, 25]);
/// assert!(!pages.has_next_page());
/// # Ok::<(), sift::SiftError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: NonZeroUsize,
    total_items: usize,
    version: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::with_page_size(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Pagination {
    /// Creates pagination with the given page size.
    ///
    /// Returns [`SiftError::InvalidPageSize`] for a page size of zero.
    pub fn new(items_per_page: usize) -> Result<Self> {
        NonZeroUsize::new(items_per_page)
            .map(Pagination::with_page_size)
            .ok_or(SiftError::InvalidPageSize)
    }

    /// Creates pagination with a page size that is already known to be valid.
    pub fn with_page_size(items_per_page: NonZeroUsize) -> Self {
        Pagination {
            current_page: 1,
            items_per_page,
            total_items: 0,
            version: None,
        }
    }

    /// Returns the current page, starting at 1.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// Returns the size of the collection last passed to
    /// [`set_total`](Self::set_total) or [`sync`](Self::sync).
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages; zero for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page.get())
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        ((self.current_page - 1) * self.items_per_page.get()).min(self.total_items)
    }

    /// Index one past the last item on the current page.
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.items_per_page.get()).min(self.total_items)
    }

    /// Returns `true` if a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Records a new collection size and clamps the current page.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp();
    }

    /// Records a new collection size and version.
    ///
    /// Returns to page 1 when `version` differs from the last one seen.
    pub fn sync(&mut self, total_items: usize, version: u64) {
        if self.version.is_some_and(|seen| seen != version) {
            tracing::trace!(target: "sift::pagination", version, "collection changed, resetting page");
            self.current_page = 1;
        }
        self.version = Some(version);
        self.set_total(total_items);
    }

    /// Changes the page size and returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: NonZeroUsize) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    /// Moves to page `page`, clamped into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp();
    }

    /// Moves forward one page, if there is one.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    /// Moves back one page, if there is one.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Returns the current page's slice of `items`.
    ///
    /// Bounds are clamped to `items.len()`, so a slice that disagrees with
    /// the recorded total yields a shorter page rather than a panic.
    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = (start + self.items_per_page.get()).min(items.len());
        &items[start..end]
    }

    /// Snapshot of the derived navigation state.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            items_per_page: self.items_per_page.get(),
            total_items: self.total_items,
            start_index: self.start_index(),
            end_index: self.end_index(),
            has_next_page: self.has_next_page(),
            has_prev_page: self.has_prev_page(),
        }
    }

    fn clamp(&mut self) {
        let max_page = self.total_pages().max(1);
        let clamped = self.current_page.clamp(1, max_page);
        if clamped != self.current_page {
            tracing::trace!(
                target: "sift::pagination",
                requested = self.current_page,
                clamped,
                "page out of range"
            );
            self.current_page = clamped;
        }
    }
}

/// Navigation metadata for rendering pagers and "showing X–Y of Z" lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(per_page: usize, total: usize) -> Pagination {
        let mut p = Pagination::new(per_page).unwrap();
        p.set_total(total);
        p
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(Pagination::new(0), Err(SiftError::InvalidPageSize));
    }

    #[test]
    fn default_page_size() {
        assert_eq!(Pagination::default().items_per_page(), 10);
    }

    #[test]
    fn empty_collection() {
        let p = pages(5, 0);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.start_index(), 0);
        assert_eq!(p.end_index(), 0);
        assert!(!p.has_next_page());
        assert!(!p.has_prev_page());
        assert!(p.current_items::<u8>(&[]).is_empty());
    }

    #[test]
    fn derived_bounds() {
        let mut p = pages(4, 10);
        assert_eq!(p.total_pages(), 3);
        assert_eq!((p.start_index(), p.end_index()), (0, 4));

        p.go_to_page(3);
        assert_eq!((p.start_index(), p.end_index()), (8, 10));
        assert!(p.has_prev_page());
        assert!(!p.has_next_page());
    }

    #[test]
    fn navigation_clamps() {
        let mut p = pages(10, 25);

        p.go_to_page(0);
        assert_eq!(p.current_page(), 1);
        p.prev_page();
        assert_eq!(p.current_page(), 1);

        p.go_to_page(usize::MAX);
        assert_eq!(p.current_page(), 3);
        p.next_page();
        assert_eq!(p.current_page(), 3);

        p.prev_page();
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn shrinking_collection_clamps_page() {
        let mut p = pages(10, 50);
        p.go_to_page(5);

        p.set_total(12);
        assert_eq!(p.current_page(), 2);

        p.set_total(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn sync_resets_on_new_version() {
        let mut p = Pagination::new(10).unwrap();
        p.sync(50, 1);
        p.go_to_page(4);

        p.sync(50, 1);
        assert_eq!(p.current_page(), 4);

        p.sync(45, 2);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut p = pages(10, 50);
        p.go_to_page(3);
        p.reset();
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut p = pages(10, 50);
        p.go_to_page(3);
        p.set_items_per_page(NonZeroUsize::new(25).unwrap());
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 2);
    }

    #[test]
    fn current_items_tolerates_short_slice() {
        let mut p = pages(3, 9);
        p.go_to_page(3);
        let short = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(p.current_items(&short), &[7]);
        assert!(p.current_items(&short[..4]).is_empty());
    }

    #[test]
    fn info_snapshot() {
        let mut p = pages(2, 3);
        p.next_page();
        assert_eq!(
            p.info(),
            PageInfo {
                current_page: 2,
                total_pages: 2,
                items_per_page: 2,
                total_items: 3,
                start_index: 2,
                end_index: 3,
                has_next_page: false,
                has_prev_page: true,
            }
        );
    }
}
