//! Error types for the solver core

use thiserror::Error;

/// Errors raised before any search state is allocated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Invalid board size {size}: size must be zero or positive")]
    InvalidSize { size: i64 },

    #[error("Unknown strategy '{name}' (expected one of: depth-first, breadth-first, backtracking, optimized)")]
    UnknownStrategy { name: String },
}

pub type SolverResult<T> = std::result::Result<T, SolverError>;
