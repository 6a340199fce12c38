//! Iteration over every page of a source array.

use crate::state::page_item_range;
use std::{iter::FusedIterator, num::NonZeroUsize, ops::RangeInclusive};

/// A page yielded by [`Pages`]: its 1-based number and the items on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub number: usize,
    pub items: &'a [T],
}

/// Iterator over all pages of a source array, first to last. Created by
/// [`Paginator::pages`](crate::Paginator::pages). Iterating doesn't move the paginator's
/// current page.
///
/// An empty array still yields one empty page, the same way an empty collection has one
/// page.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    items: &'a [T],
    item_per_page: NonZeroUsize,
    numbers: RangeInclusive<usize>,
}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(items: &'a [T], item_per_page: NonZeroUsize) -> Self {
        Self {
            items,
            item_per_page,
            numbers: 1..=crate::state::total_pages(items.len(), item_per_page),
        }
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let number = self.numbers.next()?;
        let range = page_item_range(number, self.item_per_page, self.items.len());

        Some(Page {
            number,
            items: &self.items[range],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbers.size_hint()
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}

impl<T> FusedIterator for Pages<'_, T> {}
