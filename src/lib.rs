#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("doc/Main.md")]

pub mod config;
pub mod error;
pub mod pages;
pub mod paginator;
pub mod state;
pub mod window;

pub use config::PaginatorConfig;
pub use error::{PaginatorError, Result};
pub use pages::{Page, Pages};
pub use paginator::Paginator;
pub use state::PaginatorState;
pub use window::page_window;

/// Everything needed to drive a paginator.
pub mod prelude {
    pub use crate::{page_window, Paginator, PaginatorConfig, PaginatorError, PaginatorState};
}

#[cfg(test)]
mod test_utils;
