//! Error types for the evolve crate.

use qdyn_linalg::{LinalgError, Shape};
use thiserror::Error;

/// Errors produced by the time-evolution engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EvolveError {
    /// An operator or state does not have the shape the operation requires.
    #[error("Dimension mismatch in {op}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the operation.
        op: &'static str,
        /// The shape the operation needed.
        expected: Shape,
        /// The shape it was given.
        got: Shape,
    },

    /// A capability the operation depends on is not available.
    #[error("Capability not implemented: {capability}")]
    CapabilityNotImplemented {
        /// Name of the missing capability.
        capability: &'static str,
    },

    /// An eigen-solver returned data inconsistent with the input matrix.
    #[error("Invalid eigen-decomposition: {0}")]
    InvalidDecomposition(String),

    /// Underlying linear-algebra failure.
    #[error("Linear algebra error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for time-evolution operations.
pub type EvolveResult<T> = Result<T, EvolveError>;
