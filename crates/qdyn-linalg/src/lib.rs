//! `qdyn-linalg` — dense complex linear algebra.
//!
//! This crate provides the numeric kernel the time-evolution engine in
//! `qdyn-evolve` is built on:
//!
//! - [`Scalar`]: a complex number with exact equality and checked division
//! - [`ComplexVector`]: an owned, fixed-dimension vector of [`Scalar`]
//! - [`ComplexMatrix`]: an owned, fixed-shape matrix of [`Scalar`]
//!
//! Every binary operation between incompatibly sized operands returns
//! [`LinalgError::DimensionMismatch`] instead of panicking. The `Index`
//! impls panic on out-of-range access like slices do; use the `get`/`set`
//! accessors for a checked [`LinalgError::IndexOutOfRange`].
//!
//! # Example
//!
//! ```rust
//! use qdyn_linalg::{ComplexMatrix, ComplexVector, Scalar};
//!
//! // Pauli-X applied to |0⟩ gives |1⟩.
//! let x = ComplexMatrix::from_rows(vec![
//!     vec![Scalar::ZERO, Scalar::ONE],
//!     vec![Scalar::ONE, Scalar::ZERO],
//! ])
//! .unwrap();
//! let zero = ComplexVector::basis(2, 0).unwrap();
//!
//! let one = x.apply(&zero).unwrap();
//! assert_eq!(one, ComplexVector::basis(2, 1).unwrap());
//! ```
//!
//! # Thread safety
//!
//! All types are plain owned data and therefore `Send + Sync`. There is no
//! internal locking: mutating one instance from several threads requires
//! the caller to synchronise access.

pub mod error;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use error::{LinalgError, LinalgResult, Shape};
pub use matrix::ComplexMatrix;
pub use scalar::Scalar;
pub use vector::ComplexVector;
