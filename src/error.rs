use thiserror::Error;

/// Precondition violations. Out of range navigation is never an error, those calls are
/// no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorError {
    #[error("items per page must be at least 1")]
    ZeroItemPerPage,
}

pub type Result<T, E = PaginatorError> = std::result::Result<T, E>;
