//! Error types for the linalg crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Row/column extent of an operand, used in error reports.
///
/// Vectors report as `n×1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl Shape {
    /// Shape of an `rows × columns` matrix.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Shape of a column vector of the given dimension.
    pub const fn vector(dimension: usize) -> Self {
        Self::new(dimension, 1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.columns)
    }
}

/// Errors that can occur in linear-algebra operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// A vector or matrix was constructed with a zero size or empty data.
    #[error("Invalid construction: {reason}")]
    Construction {
        /// What was wrong with the constructor arguments.
        reason: String,
    },

    /// Operands of a binary operation have incompatible shapes.
    #[error("Dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Name of the operation.
        op: &'static str,
        /// Shape of the left operand.
        lhs: Shape,
        /// Shape of the right operand.
        rhs: Shape,
    },

    /// Complex division by a divisor of magnitude zero.
    #[error("Cannot divide by a zero complex number")]
    DivideByZero,

    /// Element access outside the bounds of a vector or matrix.
    #[error("Index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        /// The offending index along the failing axis.
        index: usize,
        /// Length of that axis.
        bound: usize,
    },
}

impl LinalgError {
    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        LinalgError::Construction {
            reason: reason.into(),
        }
    }
}

/// Result type for linear-algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;
