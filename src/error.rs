//! Error types for the solver.
//!
//! It uses the thiserror crate to reduce boilerplate.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cell {decimal} is not present in the {rows}x{cols} grid")]
    Unrepresentable {
        decimal: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Cover search exceeded the budget of {0} combinations")]
    BudgetExceeded(usize),

    #[error("Cannot parse expression {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

pub type KMapResult<T> = Result<T, KMapError>;

pub fn invalid_input(s: impl Into<String>) -> KMapError {
    KMapError::InvalidInput(s.into())
}
