//! The pagination snapshot and its transitions.
//!
//! [`PaginatorState`] is a small `Copy` value. Every transition consumes the old snapshot and
//! returns a new one, so a host can detect changes by comparing snapshots with `==`.

use crate::{
    error::{PaginatorError, Result},
    window::page_window,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::{num::NonZeroUsize, ops::Range};

pub const DEFAULT_TOTAL_ITEMS: usize = 0;
pub const DEFAULT_ITEM_PER_PAGE: usize = 10;
pub const DEFAULT_CURRENT_PAGE: usize = 1;

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_ITEM_PER_PAGE) {
    Some(size) => size,
    None => panic!("default page size must not be zero"),
};

/// Number of pages needed for `total_items` items. An empty collection still has one page.
pub fn total_pages(total_items: usize, item_per_page: NonZeroUsize) -> usize {
    total_items.div_ceil(item_per_page.get()).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginatorState {
    current_page: usize,
    item_per_page: NonZeroUsize,
    total_items: usize,
}

impl PaginatorState {
    /// Creates a snapshot from positional values.
    ///
    /// `current_page` is clamped into `[1, total_pages]`. Fails only when `item_per_page` is
    /// zero.
    pub fn new(total_items: usize, item_per_page: usize, current_page: usize) -> Result<Self> {
        let Some(item_per_page) = NonZeroUsize::new(item_per_page) else {
            tracing::warn!(
                total_items,
                current_page,
                "rejected paginator with zero items per page"
            );
            return Err(PaginatorError::ZeroItemPerPage);
        };

        let last_page = total_pages(total_items, item_per_page);
        let clamped = current_page.clamp(1, last_page);
        if clamped != current_page {
            tracing::debug!(
                requested = current_page,
                clamped,
                total_pages = last_page,
                "initial page is out of range"
            );
        }

        Ok(Self {
            current_page: clamped,
            item_per_page,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn item_per_page(&self) -> usize {
        self.item_per_page.get()
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub(crate) fn page_size(&self) -> NonZeroUsize {
        self.item_per_page
    }

    /// Always derived from `total_items` and `item_per_page`, never stored.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.item_per_page)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    pub fn has_next_page(&self) -> bool {
        !self.is_last_page()
    }

    pub fn has_previous_page(&self) -> bool {
        !self.is_first_page()
    }

    /// Zero-based offsets of the items shown on the current page, clamped to `total_items`.
    ///
    /// ```
    /// use page_window::PaginatorState;
    ///
    /// let state = PaginatorState::new(25, 10, 3).unwrap();
    /// assert_eq!(state.item_range(), 20..25);
    /// ```
    pub fn item_range(&self) -> Range<usize> {
        page_item_range(self.current_page, self.item_per_page, self.total_items)
    }

    /// Page numbers to render as links, see [`page_window`].
    pub fn paginator_range(&self, span: usize) -> Vec<usize> {
        page_window(self.current_page, self.total_pages(), span).collect()
    }

    pub fn go_next_page(self) -> Self {
        if self.is_last_page() {
            tracing::debug!(current_page = self.current_page, "already at the last page");
            return self;
        }

        self.with_current_page(self.current_page + 1)
    }

    pub fn go_previous_page(self) -> Self {
        if self.is_first_page() {
            tracing::debug!("already at the first page");
            return self;
        }

        self.with_current_page(self.current_page - 1)
    }

    pub fn go_first_page(self) -> Self {
        self.with_current_page(1)
    }

    pub fn go_last_page(self) -> Self {
        let last_page = self.total_pages();
        self.with_current_page(last_page)
    }

    /// Jumps to `page`. Pages outside `[1, total_pages]` leave the snapshot untouched.
    pub fn go_page(self, page: usize) -> Self {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            tracing::debug!(page, total_pages, "ignored jump to a page out of range");
            return self;
        }

        self.with_current_page(page)
    }

    /// Changes the page size, keeping the current page inside the new page count.
    ///
    /// A page size larger than the whole collection is ignored. Asking for the current page
    /// size changes nothing except the optional reset to the first page.
    pub fn change_item_per_page(self, per_page: usize, reset_to_first_page: bool) -> Result<Self> {
        let Some(per_page) = NonZeroUsize::new(per_page) else {
            tracing::warn!("rejected zero items per page");
            return Err(PaginatorError::ZeroItemPerPage);
        };

        if per_page.get() > self.total_items {
            tracing::debug!(
                per_page = per_page.get(),
                total_items = self.total_items,
                "ignored page size larger than the collection"
            );
            return Ok(self);
        }

        if per_page == self.item_per_page && !reset_to_first_page {
            return Ok(self);
        }

        let new_total_pages = total_pages(self.total_items, per_page);
        let current_page = if reset_to_first_page {
            1
        } else {
            self.current_page.min(new_total_pages)
        };

        tracing::trace!(
            from = self.item_per_page.get(),
            to = per_page.get(),
            current_page,
            total_pages = new_total_pages,
            "changed items per page"
        );

        Ok(Self {
            current_page,
            item_per_page: per_page,
            ..self
        })
    }

    /// Changes the number of items, pulling the current page back if it no longer exists.
    pub fn change_total_items(self, total_items: usize) -> Self {
        let new_total_pages = total_pages(total_items, self.item_per_page);
        let current_page = self.current_page.min(new_total_pages);

        tracing::trace!(
            from = self.total_items,
            to = total_items,
            current_page,
            total_pages = new_total_pages,
            "changed total items"
        );

        Self {
            current_page,
            total_items,
            ..self
        }
    }

    fn with_current_page(self, current_page: usize) -> Self {
        tracing::trace!(from = self.current_page, to = current_page, "changed page");
        Self {
            current_page,
            ..self
        }
    }
}

impl Default for PaginatorState {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_CURRENT_PAGE,
            item_per_page: DEFAULT_PAGE_SIZE,
            total_items: DEFAULT_TOTAL_ITEMS,
        }
    }
}

// Written by hand to include the derived `totalPages`.
impl Serialize for PaginatorState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PaginatorState", 4)?;
        state.serialize_field("currentPage", &self.current_page)?;
        state.serialize_field("itemPerPage", &self.item_per_page)?;
        state.serialize_field("totalItems", &self.total_items)?;
        state.serialize_field("totalPages", &self.total_pages())?;
        state.end()
    }
}

pub(crate) fn page_item_range(
    page: usize,
    item_per_page: NonZeroUsize,
    total_items: usize,
) -> Range<usize> {
    let per_page = item_per_page.get();
    let start = page.saturating_sub(1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn total_pages_matches_ceiling_division() {
        for total_items in 0..=120 {
            for item_per_page in 1..=15 {
                let state = state(total_items, item_per_page, 1);
                let expected = ((total_items + item_per_page - 1) / item_per_page).max(1);

                assert_eq!(state.total_pages(), expected);
            }
        }
    }

    #[test]
    fn defaults() {
        let state = PaginatorState::default();

        assert_eq!(state.total_items(), 0);
        assert_eq!(state.item_per_page(), 10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn zero_item_per_page_is_rejected() {
        assert_eq!(
            PaginatorState::new(10, 0, 1),
            Err(PaginatorError::ZeroItemPerPage)
        );
        assert_eq!(
            state(10, 5, 1).change_item_per_page(0, false),
            Err(PaginatorError::ZeroItemPerPage)
        );
    }

    #[test]
    fn initial_page_is_clamped() {
        assert_eq!(state(200, 10, 0).current_page(), 1);
        assert_eq!(state(200, 10, 21).current_page(), 20);
        assert_eq!(state(0, 10, 3).current_page(), 1);
    }

    #[test]
    fn navigation_scenario() {
        let s = state(200, 10, 1);
        assert_eq!(s.total_pages(), 20);

        let s = s.go_next_page().go_next_page();
        assert_eq!(s.current_page(), 3);

        let s = s.go_previous_page();
        assert_eq!(s.current_page(), 2);

        let s = s.go_last_page();
        assert_eq!(s.current_page(), 20);

        let s = s.go_first_page();
        assert_eq!(s.current_page(), 1);

        let s = s.go_page(21);
        assert_eq!(s.current_page(), 1);

        let s = s.go_page(15);
        assert_eq!(s.current_page(), 15);
    }

    #[test]
    fn next_and_previous_stop_at_the_edges() {
        let first = state(30, 10, 1);
        assert_eq!(first.go_previous_page(), first);

        let last = state(30, 10, 3);
        assert_eq!(last.go_next_page(), last);

        let single = state(0, 10, 1);
        assert_eq!(single.go_next_page(), single);
        assert_eq!(single.go_previous_page(), single);
    }

    #[test]
    fn next_then_previous_is_identity_away_from_edges() {
        let total_pages = state(95, 7, 1).total_pages();
        for page in 2..total_pages {
            let s = state(95, 7, page);
            assert_eq!(s.go_next_page().go_previous_page(), s);
        }
    }

    #[test]
    fn go_page_is_idempotent_and_ignores_out_of_range() {
        let s = state(50, 10, 2);

        assert_eq!(s.go_page(4), s.go_page(4).go_page(4));
        assert_eq!(s.go_page(0), s);
        assert_eq!(s.go_page(6), s);
        assert_eq!(s.go_page(usize::MAX), s);
    }

    #[test]
    fn change_item_per_page_scenario() {
        let s = state(200, 20, 1);
        assert_eq!(s.total_pages(), 10);

        let s = s.change_item_per_page(10, false).unwrap();
        assert_eq!(s.total_pages(), 20);
        assert_eq!(s.current_page(), 1);

        let s = s.go_page(5);
        assert_eq!(s.current_page(), 5);

        let s = s.change_item_per_page(10, true).unwrap();
        assert_eq!(s.current_page(), 1);
        assert_eq!(s.item_per_page(), 10);
    }

    #[test]
    fn change_item_per_page_keeps_or_clamps_current_page() {
        let s = state(200, 20, 8).change_item_per_page(10, false).unwrap();
        assert_eq!(s.current_page(), 8);

        let s = state(200, 10, 18).change_item_per_page(25, false).unwrap();
        assert_eq!(s.total_pages(), 8);
        assert_eq!(s.current_page(), 8);
    }

    #[test]
    fn change_item_per_page_ignores_sizes_above_total_items() {
        let s = state(30, 10, 2);

        assert_eq!(s.change_item_per_page(31, false), Ok(s));
        assert_eq!(s.change_item_per_page(31, true), Ok(s));
        assert_eq!(s.change_item_per_page(30, false).unwrap().total_pages(), 1);
    }

    #[test]
    fn change_item_per_page_to_same_size_is_noop() {
        let s = state(30, 10, 2);
        assert_eq!(s.change_item_per_page(10, false), Ok(s));
    }

    #[test]
    fn change_total_items_clamps_and_restores() {
        let original = state(200, 10, 15);

        let shrunk = original.change_total_items(45);
        assert_eq!(shrunk.total_pages(), 5);
        assert_eq!(shrunk.current_page(), 5);

        let restored = shrunk.change_total_items(200);
        assert_eq!(restored.total_pages(), original.total_pages());
        assert!(restored.current_page() <= restored.total_pages());

        let grown = original.change_total_items(500);
        assert_eq!(grown.total_pages(), 50);
        assert_eq!(grown.current_page(), 15);
    }

    #[test]
    fn change_total_items_to_one_leaves_a_single_page() {
        let s = state(200, 5, 7).change_total_items(1);

        assert_eq!(s.total_pages(), 1);
        assert_eq!(s.current_page(), 1);
        assert_eq!(s.paginator_range(5), vec![1]);
    }

    #[test]
    fn paginator_range_on_last_page() {
        let s = state(200, 10, 20);
        assert_eq!(s.paginator_range(5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn item_range_is_clamped_to_total_items() {
        assert_eq!(state(25, 10, 1).item_range(), 0..10);
        assert_eq!(state(25, 10, 3).item_range(), 20..25);
        assert_eq!(state(0, 10, 1).item_range(), 0..0);
    }

    #[test]
    fn boundary_predicates() {
        let s = state(30, 10, 1);
        assert!(s.is_first_page() && !s.has_previous_page() && s.has_next_page());

        let s = s.go_last_page();
        assert!(s.is_last_page() && s.has_previous_page() && !s.has_next_page());

        let single = state(3, 10, 1);
        assert!(single.is_first_page() && single.is_last_page());
    }

    #[test]
    fn serializes_with_derived_total_pages() {
        let json = serde_json::to_value(state(200, 10, 3)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "currentPage": 3,
                "itemPerPage": 10,
                "totalItems": 200,
                "totalPages": 20,
            })
        );
    }
}
