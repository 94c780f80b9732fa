//! Validation errors for payoff matrices

use thiserror::Error;

/// Errors raised while building a [`PayoffMatrix`](crate::PayoffMatrix).
///
/// Every variant is detected before any best response is computed, so a
/// failing input never produces a partial report.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The matrix is empty, has no columns, or is ragged.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(#[from] ShapeError),

    /// A cell is not a two-element pair of finite numbers.
    #[error("invalid cell at row {row}, column {col}: {reason}")]
    InvalidCell {
        row: usize,
        col: usize,
        reason: CellError,
    },

    /// The input document could not be parsed.
    #[error("malformed matrix document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shape problems, reported as [`MatrixError::InvalidMatrix`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("matrix has no rows")]
    Empty,
    #[error("matrix has no columns")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Cell problems, reported as [`MatrixError::InvalidCell`].
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CellError {
    #[error("expected a [p1, p2] pair")]
    NotAPair,
    #[error("expected 2 payoffs, found {0}")]
    WrongArity(usize),
    #[error("payoff {0} is not a number")]
    NotANumber(String),
    #[error("payoff {0} is not finite")]
    NotFinite(f64),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn cell(row: usize, col: usize, reason: CellError) -> Self {
        MatrixError::InvalidCell { row, col, reason }
    }

    /// True for shape failures (`InvalidMatrix`).
    pub fn is_invalid_matrix(&self) -> bool {
        matches!(self, MatrixError::InvalidMatrix(_))
    }

    /// True for cell failures (`InvalidCell`).
    pub fn is_invalid_cell(&self) -> bool {
        matches!(self, MatrixError::InvalidCell { .. })
    }
}
