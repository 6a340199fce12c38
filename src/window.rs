//! The page window: a short run of page numbers to render as page links.

use std::ops::RangeInclusive;

/// How many pages before the current one a window starts at when nothing pushes it around.
pub const PAGES_BEFORE_CURRENT: usize = 2;

/// Computes the window of at most `span` page numbers around `current_page`.
///
/// The window starts [`PAGES_BEFORE_CURRENT`] pages before the current page and runs for
/// `span` pages. When the end is cut by `total_pages` the window is extended to the left
/// instead, so it stays `span` pages wide unless there are fewer pages than that. It never
/// contains a page below `1` or above `total_pages`.
///
/// ```
/// use page_window::page_window;
///
/// assert_eq!(page_window(1, 20, 5), 1..=5);
/// assert_eq!(page_window(4, 20, 5), 2..=6);
/// assert_eq!(page_window(20, 20, 5), 16..=20);
/// assert_eq!(page_window(1, 3, 5), 1..=3);
/// ```
pub fn page_window(current_page: usize, total_pages: usize, span: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    if span == 0 {
        return RangeInclusive::new(1, 0);
    }

    let current_page = current_page.clamp(1, total_pages);
    let start = current_page.saturating_sub(PAGES_BEFORE_CURRENT).max(1);
    let end = start.saturating_add(span - 1).min(total_pages);

    // `end - start + 1 == span` unless the end got clamped, so this only moves `start` when
    // the window has to grow leftwards.
    let first = end.saturating_sub(span - 1).max(1);

    first..=end
}
