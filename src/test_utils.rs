use crate::{Paginator, PaginatorState};

pub fn state(total_items: usize, item_per_page: usize, current_page: usize) -> PaginatorState {
    PaginatorState::new(total_items, item_per_page, current_page).unwrap()
}

/// A paginator over `1..=count` with the source array set.
pub fn numbers_paginator(count: u32, item_per_page: usize) -> Paginator<u32> {
    Paginator::with_source_array((1..=count).collect(), item_per_page).unwrap()
}

/// A paginator without a source array, for tests that only care about page numbers.
pub fn paginator(total_items: usize, item_per_page: usize, current_page: usize) -> Paginator {
    Paginator::new(total_items, item_per_page, current_page).unwrap()
}
