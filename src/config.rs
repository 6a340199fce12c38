use crate::{
    error::Result,
    state::{PaginatorState, DEFAULT_CURRENT_PAGE, DEFAULT_ITEM_PER_PAGE, DEFAULT_TOTAL_ITEMS},
};
use serde::{Deserialize, Serialize};

/// Named configuration of a paginator, used both to build one and to resync it with values
/// owned by someone else.
///
/// Every field is optional when deserialized and falls back to its default. Field names are
/// camelCase on the wire: `totalItems`, `itemPerPage`, `currentPage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginatorConfig {
    pub total_items: usize,
    pub item_per_page: usize,
    pub current_page: usize,
}

impl PaginatorConfig {
    pub fn new() -> Self {
        Self {
            total_items: DEFAULT_TOTAL_ITEMS,
            item_per_page: DEFAULT_ITEM_PER_PAGE,
            current_page: DEFAULT_CURRENT_PAGE,
        }
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_item_per_page(mut self, item_per_page: usize) -> Self {
        self.item_per_page = item_per_page;
        self
    }

    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    /// Checks the preconditions and builds the snapshot this config describes.
    pub fn validate(&self) -> Result<PaginatorState> {
        PaginatorState::new(self.total_items, self.item_per_page, self.current_page)
    }
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `(total_items, item_per_page, current_page)`
impl From<(usize, usize, usize)> for PaginatorConfig {
    fn from((total_items, item_per_page, current_page): (usize, usize, usize)) -> Self {
        Self {
            total_items,
            item_per_page,
            current_page,
        }
    }
}

impl From<PaginatorState> for PaginatorConfig {
    fn from(state: PaginatorState) -> Self {
        Self {
            total_items: state.total_items(),
            item_per_page: state.item_per_page(),
            current_page: state.current_page(),
        }
    }
}
