//! Eigen-decomposition capability.
//!
//! Dense complex eigen-decomposition is not implemented in this workspace.
//! The engine consumes it through the [`EigenSolver`] trait so that an
//! external numerical library can be plugged in later without changing
//! any caller. Until then [`UnavailableEigenSolver`] is the default and
//! always reports [`EvolveError::CapabilityNotImplemented`].

use qdyn_linalg::{ComplexMatrix, ComplexVector};
use serde::{Deserialize, Serialize};

use crate::error::{EvolveError, EvolveResult};

/// Eigenvalues and eigenvectors of a Hermitian matrix.
///
/// `eigenvectors[k]` belongs to `eigenvalues[k]`. For the spectral
/// propagator to be unitary the eigenvectors must be orthonormal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEigenDecomposition")]
pub struct EigenDecomposition {
    eigenvalues: Vec<f64>,
    eigenvectors: Vec<ComplexVector>,
}

/// Unvalidated wire form; deserialization goes through [`EigenDecomposition::new`].
#[derive(Deserialize)]
struct RawEigenDecomposition {
    eigenvalues: Vec<f64>,
    eigenvectors: Vec<ComplexVector>,
}

impl TryFrom<RawEigenDecomposition> for EigenDecomposition {
    type Error = EvolveError;

    fn try_from(raw: RawEigenDecomposition) -> EvolveResult<Self> {
        Self::new(raw.eigenvalues, raw.eigenvectors)
    }
}

impl EigenDecomposition {
    /// Pair up eigenvalues with eigenvectors.
    ///
    /// Fails if the lists are empty, have different lengths, or the
    /// eigenvectors do not all share one dimension.
    pub fn new(eigenvalues: Vec<f64>, eigenvectors: Vec<ComplexVector>) -> EvolveResult<Self> {
        if eigenvalues.is_empty() {
            return Err(EvolveError::InvalidDecomposition(
                "no eigenpairs".to_string(),
            ));
        }
        if eigenvalues.len() != eigenvectors.len() {
            return Err(EvolveError::InvalidDecomposition(format!(
                "{} eigenvalues but {} eigenvectors",
                eigenvalues.len(),
                eigenvectors.len()
            )));
        }
        let dim = eigenvectors[0].dimension();
        if let Some(v) = eigenvectors.iter().find(|v| v.dimension() != dim) {
            return Err(EvolveError::InvalidDecomposition(format!(
                "eigenvector of dimension {} among vectors of dimension {dim}",
                v.dimension()
            )));
        }
        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// The (real) eigenvalues.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// The eigenvectors, in eigenvalue order.
    pub fn eigenvectors(&self) -> &[ComplexVector] {
        &self.eigenvectors
    }

    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Always false: a decomposition holds at least one eigenpair.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Iterate over `(eigenvalue, eigenvector)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, &ComplexVector)> {
        self.eigenvalues.iter().copied().zip(&self.eigenvectors)
    }
}

/// A provider of dense complex eigen-decompositions.
pub trait EigenSolver {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Decompose a square Hermitian matrix.
    fn decompose(&self, matrix: &ComplexMatrix) -> EvolveResult<EigenDecomposition>;
}

/// The default solver: eigen-decomposition is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableEigenSolver;

impl EigenSolver for UnavailableEigenSolver {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn decompose(&self, _matrix: &ComplexMatrix) -> EvolveResult<EigenDecomposition> {
        Err(EvolveError::CapabilityNotImplemented {
            capability: "eigen-decomposition",
        })
    }
}
