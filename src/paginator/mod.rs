//! The paginator engine. It owns the current [`PaginatorState`] and, optionally, an array to
//! paginate in memory.
//!
//! Every operation computes a new snapshot from the current one and replaces it. Operations
//! return `true` when the new snapshot differs from the old one, so callers that re-render on
//! change don't need to compare snapshots themselves.

use crate::{
    config::PaginatorConfig,
    error::Result,
    pages::Pages,
    state::{page_item_range, PaginatorState},
};
use std::ops::Range;

#[cfg(feature = "stream")]
use crate::pages::Page;
#[cfg(feature = "stream")]
use futures::stream::{self, Stream};

/// `T` is the item type of the source array. Paginators that only track page numbers keep
/// the default `()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T = ()> {
    state: PaginatorState,
    source_array: Option<Vec<T>>,
}

impl Paginator {
    /// Creates a paginator from positional values. See [`PaginatorState::new`].
    pub fn new(total_items: usize, item_per_page: usize, current_page: usize) -> Result<Self> {
        PaginatorState::new(total_items, item_per_page, current_page).map(Self::from_state)
    }

    /// Creates a paginator from a named config or a `(total_items, item_per_page,
    /// current_page)` tuple.
    pub fn with_config(config: impl Into<PaginatorConfig>) -> Result<Self> {
        config.into().validate().map(Self::from_state)
    }
}

impl<T> Paginator<T> {
    /// Creates a paginator over `source_array`, on its first page.
    pub fn with_source_array(source_array: Vec<T>, item_per_page: usize) -> Result<Self> {
        let state = PaginatorState::new(source_array.len(), item_per_page, 1)?;
        Ok(Self {
            state,
            source_array: Some(source_array),
        })
    }

    pub fn from_state(state: PaginatorState) -> Self {
        Self {
            state,
            source_array: None,
        }
    }

    /// Replaces the tracked values with ones owned by the caller, e.g. when a parent
    /// component passes new values down. Prior state is discarded, including the source
    /// array.
    ///
    /// On error nothing is replaced.
    pub fn resync(&mut self, config: impl Into<PaginatorConfig>) -> Result<bool> {
        let config = config.into();
        let next = config.validate()?;
        let dropped_source = self.source_array.take().is_some();

        tracing::debug!(
            total_items = config.total_items,
            item_per_page = config.item_per_page,
            current_page = config.current_page,
            dropped_source,
            "resynced paginator"
        );

        Ok(self.replace(next) || dropped_source)
    }

    pub fn state(&self) -> PaginatorState {
        self.state
    }

    pub fn into_state(self) -> PaginatorState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn item_per_page(&self) -> usize {
        self.state.item_per_page()
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn is_first_page(&self) -> bool {
        self.state.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page()
    }

    pub fn has_next_page(&self) -> bool {
        self.state.has_next_page()
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.has_previous_page()
    }

    pub fn item_range(&self) -> Range<usize> {
        self.state.item_range()
    }

    /// See [`page_window`](crate::page_window).
    pub fn paginator_range(&self, span: usize) -> Vec<usize> {
        self.state.paginator_range(span)
    }

    pub fn go_next_page(&mut self) -> bool {
        self.replace(self.state.go_next_page())
    }

    pub fn go_previous_page(&mut self) -> bool {
        self.replace(self.state.go_previous_page())
    }

    pub fn go_first_page(&mut self) -> bool {
        self.replace(self.state.go_first_page())
    }

    pub fn go_last_page(&mut self) -> bool {
        self.replace(self.state.go_last_page())
    }

    pub fn go_page(&mut self, page: usize) -> bool {
        self.replace(self.state.go_page(page))
    }

    /// See [`PaginatorState::change_item_per_page`].
    pub fn change_item_per_page(
        &mut self,
        per_page: usize,
        reset_to_first_page: bool,
    ) -> Result<bool> {
        let next = self.state.change_item_per_page(per_page, reset_to_first_page)?;
        Ok(self.replace(next))
    }

    pub fn change_total_items(&mut self, total_items: usize) -> bool {
        self.replace(self.state.change_total_items(total_items))
    }

    /// Paginates `source_array` in memory: goes back to the first page and counts its items.
    /// The page size is kept.
    pub fn set_source_array(&mut self, source_array: Vec<T>) {
        let total_items = source_array.len();
        self.replace(self.state.change_total_items(total_items).go_first_page());
        self.source_array = Some(source_array);
    }

    /// Drops the source array and returns it. The numeric state stays as it is.
    pub fn clear_source_array(&mut self) -> Option<Vec<T>> {
        self.source_array.take()
    }

    pub fn source_array(&self) -> Option<&[T]> {
        self.source_array.as_deref()
    }

    /// Items of the source array on the current page, `None` without a source array.
    ///
    /// The slice is empty when the current page lies past the end of the array, which can
    /// happen after `change_total_items` grew the count beyond the array's length.
    pub fn paged_slice(&self) -> Option<&[T]> {
        let source_array = self.source_array.as_deref()?;
        let range = page_item_range(
            self.state.current_page(),
            self.state.page_size(),
            source_array.len(),
        );

        Some(&source_array[range])
    }

    /// Iterates over every page of the source array, `None` without a source array.
    pub fn pages(&self) -> Option<Pages<'_, T>> {
        let source_array = self.source_array.as_deref()?;
        Some(Pages::new(source_array, self.state.page_size()))
    }

    /// Same as [`Paginator::pages`] but as a [`Stream`], for hosts that consume pages
    /// asynchronously.
    ///
    /// ```
    /// use futures::StreamExt;
    /// use page_window::Paginator;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let paginator = Paginator::with_source_array((1..=10).collect::<Vec<u32>>(), 4).unwrap();
    ///
    /// let sums: Vec<u32> = paginator
    ///     .pages_stream()
    ///     .unwrap()
    ///     .map(|page| page.items.iter().sum::<u32>())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(sums, vec![10, 26, 19]);
    /// # }
    /// ```
    #[cfg(feature = "stream")]
    #[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
    pub fn pages_stream(&self) -> Option<impl Stream<Item = Page<'_, T>> + '_> {
        self.pages().map(stream::iter)
    }

    fn replace(&mut self, next: PaginatorState) -> bool {
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::from_state(PaginatorState::default())
    }
}

impl<T> From<PaginatorState> for Paginator<T> {
    fn from(state: PaginatorState) -> Self {
        Self::from_state(state)
    }
}
