//! Time evolution and derived quantities.
//!
//! The propagator of a time-independent Hamiltonian is
//!
//!   U(t) = exp(-i H t / ħ)
//!
//! [`time_evolve`] approximates it with the truncated Maclaurin series
//!
//!   U(t) ≈ Σ_{k=0}^{steps} M^k / k!,   M = -i H t / ħ
//!
//! which works for any square `H`. Accuracy improves with `steps` and
//! degrades as `|t|·‖H‖/ħ` grows. Each step costs one dense matrix product,
//! so the total cost is `O(steps · dim³)`.
//!
//! [`time_evolve_eigen`] builds the propagator from an eigen-decomposition
//! instead. With no solver available it falls back to the series and says
//! so in the returned [`Evolution`].
//!
//! All functions here are pure over their arguments, except
//! [`normalize_state`] which mutates the given state in place.

use qdyn_linalg::{ComplexMatrix, ComplexVector, Scalar, Shape};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::REDUCED_PLANCK_CONSTANT;
use crate::eigen::{EigenDecomposition, EigenSolver, UnavailableEigenSolver};
use crate::error::{EvolveError, EvolveResult};

/// Series order used when the caller does not choose one.
pub const DEFAULT_SERIES_STEPS: usize = 100;

/// How an evolved state was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    /// Truncated Maclaurin series of the given order.
    TruncatedSeries {
        /// Highest power of the exponent included.
        steps: usize,
    },
    /// Exact propagator built from an eigen-decomposition.
    Spectral,
}

/// Result of an eigen-based evolution request.
#[derive(Debug, Clone, PartialEq)]
pub struct Evolution {
    /// The evolved state (not renormalized).
    pub state: ComplexVector,
    /// The method actually used.
    pub method: EvolutionMethod,
    /// Why the spectral path was not taken, if it was not.
    pub fallback: Option<EvolveError>,
}

impl Evolution {
    /// True if the requested spectral method was replaced by the series.
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Truncated-series time-evolution of a fixed Hamiltonian.
///
/// Building the propagator once and applying it to several states avoids
/// repeating the `O(steps · dim³)` series.
#[derive(Debug, Clone)]
pub struct TaylorEvolution<'a> {
    hamiltonian: &'a ComplexMatrix,
    /// Evolution time t, in seconds.
    time: f64,
    /// Order of the truncated series.
    steps: usize,
}

impl<'a> TaylorEvolution<'a> {
    /// Evolve under `hamiltonian` (in joules) for `time` seconds with
    /// [`DEFAULT_SERIES_STEPS`] terms.
    pub fn new(hamiltonian: &'a ComplexMatrix, time: f64) -> Self {
        Self {
            hamiltonian,
            time,
            steps: DEFAULT_SERIES_STEPS,
        }
    }

    /// Override the series order. Zero steps gives the identity propagator.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// The series order in use.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sum the truncated series `Σ_{k=0}^{steps} M^k / k!`.
    pub fn propagator(&self) -> EvolveResult<ComplexMatrix> {
        let dim = require_square(self.hamiltonian, "time evolution")?;
        debug!(
            dim,
            steps = self.steps,
            time = self.time,
            "building truncated-series propagator"
        );

        // M = H · (i · (-t / ħ))
        let exponent = self
            .hamiltonian
            .scale(Scalar::I.scale(-self.time / REDUCED_PLANCK_CONSTANT));

        let mut propagator = ComplexMatrix::identity(dim)?;
        let mut power = ComplexMatrix::identity(dim)?;
        let mut factorial = 1.0_f64;
        for k in 1..=self.steps {
            power = power.matmul(&exponent)?;
            factorial *= k as f64;
            propagator = propagator.try_add(&power.scale_real(1.0 / factorial))?;
        }
        Ok(propagator)
    }

    /// Apply the propagator to `state`.
    pub fn evolve(&self, state: &ComplexVector) -> EvolveResult<ComplexVector> {
        require_operator_on(self.hamiltonian, state, "time evolution")?;
        Ok(self.propagator()?.apply(state)?)
    }
}

/// Evolve `initial_state` under `hamiltonian` for `time` seconds using a
/// truncated series of order `steps`.
///
/// The Hamiltonian must be square with the state's dimension. The result is
/// not renormalized; truncation and rounding error may leave its norm
/// slightly off one.
pub fn time_evolve(
    initial_state: &ComplexVector,
    hamiltonian: &ComplexMatrix,
    time: f64,
    steps: usize,
) -> EvolveResult<ComplexVector> {
    TaylorEvolution::new(hamiltonian, time)
        .with_steps(steps)
        .evolve(initial_state)
}

/// [`time_evolve`] with [`DEFAULT_SERIES_STEPS`].
pub fn time_evolve_default(
    initial_state: &ComplexVector,
    hamiltonian: &ComplexMatrix,
    time: f64,
) -> EvolveResult<ComplexVector> {
    time_evolve(initial_state, hamiltonian, time, DEFAULT_SERIES_STEPS)
}

/// Evolve using an eigen-decomposition of `hamiltonian`, with the default
/// (unavailable) solver.
///
/// This currently always falls back to the truncated series; the returned
/// [`Evolution::fallback`] records that.
pub fn time_evolve_eigen(
    initial_state: &ComplexVector,
    hamiltonian: &ComplexMatrix,
    time: f64,
) -> EvolveResult<Evolution> {
    time_evolve_eigen_with(&UnavailableEigenSolver, initial_state, hamiltonian, time)
}

/// Evolve using the eigen-decomposition provided by `solver`.
///
/// The propagator is `Σ_k exp(-i λ_k t / ħ) |v_k⟩⟨v_k|`, exact for a
/// Hermitian Hamiltonian with orthonormal eigenvectors. If the solver
/// reports [`EvolveError::CapabilityNotImplemented`] the truncated series
/// with [`DEFAULT_SERIES_STEPS`] is used instead, a warning is logged and
/// the returned [`Evolution`] carries the reason. Any other solver error is
/// returned as is.
pub fn time_evolve_eigen_with<S: EigenSolver + ?Sized>(
    solver: &S,
    initial_state: &ComplexVector,
    hamiltonian: &ComplexMatrix,
    time: f64,
) -> EvolveResult<Evolution> {
    let dim = require_operator_on(hamiltonian, initial_state, "eigen time evolution")?;

    match solver.decompose(hamiltonian) {
        Ok(decomposition) => {
            let propagator = spectral_propagator(&decomposition, dim, time)?;
            Ok(Evolution {
                state: propagator.apply(initial_state)?,
                method: EvolutionMethod::Spectral,
                fallback: None,
            })
        }
        Err(reason @ EvolveError::CapabilityNotImplemented { .. }) => {
            warn!(
                solver = solver.name(),
                dim,
                steps = DEFAULT_SERIES_STEPS,
                "eigen-decomposition unavailable, falling back to truncated series"
            );
            let state = time_evolve(initial_state, hamiltonian, time, DEFAULT_SERIES_STEPS)?;
            Ok(Evolution {
                state,
                method: EvolutionMethod::TruncatedSeries {
                    steps: DEFAULT_SERIES_STEPS,
                },
                fallback: Some(reason),
            })
        }
        Err(e) => Err(e),
    }
}

/// Decompose `matrix` with the default solver.
///
/// Eigen-decomposition is not implemented, so this returns
/// [`EvolveError::CapabilityNotImplemented`] for every square input.
pub fn solve_eigenvalue_problem(matrix: &ComplexMatrix) -> EvolveResult<EigenDecomposition> {
    solve_eigenvalue_problem_with(&UnavailableEigenSolver, matrix)
}

/// Decompose a square `matrix` with the given solver.
pub fn solve_eigenvalue_problem_with<S: EigenSolver + ?Sized>(
    solver: &S,
    matrix: &ComplexMatrix,
) -> EvolveResult<EigenDecomposition> {
    require_square(matrix, "eigenvalue problem")?;
    solver.decompose(matrix)
}

/// `⟨state| observable |state⟩`.
///
/// Computed as `state.dot(observable · state)`. [`ComplexVector::dot`]
/// already conjugates its receiver, so the state is not conjugated first:
/// doing both would conjugate twice and give the wrong sign for states
/// with imaginary amplitudes.
///
/// Hermiticity is not checked, so the imaginary part is returned as is.
pub fn expectation_value(
    state: &ComplexVector,
    observable: &ComplexMatrix,
) -> EvolveResult<Scalar> {
    require_operator_on(observable, state, "expectation value")?;
    let transformed = observable.apply(state)?;
    Ok(state.dot(&transformed)?)
}

/// `|⟨measured_state|initial_state⟩|²`.
///
/// Inputs are not normalized; the value is a probability only when both
/// states have unit norm.
pub fn probability_of_measuring_state(
    measured_state: &ComplexVector,
    initial_state: &ComplexVector,
) -> EvolveResult<f64> {
    if measured_state.dimension() != initial_state.dimension() {
        return Err(EvolveError::DimensionMismatch {
            op: "measurement probability",
            expected: measured_state.shape(),
            got: initial_state.shape(),
        });
    }
    let amplitude = measured_state.dot(initial_state)?;
    let magnitude = amplitude.magnitude();
    Ok(magnitude * magnitude)
}

/// Scale `state` to unit norm in place; a zero state is left unchanged.
pub fn normalize_state(state: &mut ComplexVector) {
    state.normalize();
}

/// `[A, B] = A·B − B·A`.
pub fn commutator(a: &ComplexMatrix, b: &ComplexMatrix) -> EvolveResult<ComplexMatrix> {
    require_same_square(a, b, "commutator")?;
    Ok(a.matmul(b)?.try_sub(&b.matmul(a)?)?)
}

/// `{A, B} = A·B + B·A`.
pub fn anti_commutator(a: &ComplexMatrix, b: &ComplexMatrix) -> EvolveResult<ComplexMatrix> {
    require_same_square(a, b, "anti-commutator")?;
    Ok(a.matmul(b)?.try_add(&b.matmul(a)?)?)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn spectral_propagator(
    decomposition: &EigenDecomposition,
    dim: usize,
    time: f64,
) -> EvolveResult<ComplexMatrix> {
    if decomposition.len() != dim || decomposition.eigenvectors().len() != dim {
        return Err(EvolveError::InvalidDecomposition(format!(
            "expected {dim} eigenpairs, got {} eigenvalues and {} eigenvectors",
            decomposition.len(),
            decomposition.eigenvectors().len()
        )));
    }
    if let Some(v) = decomposition
        .eigenvectors()
        .iter()
        .find(|v| v.dimension() != dim)
    {
        return Err(EvolveError::InvalidDecomposition(format!(
            "expected eigenvectors of dimension {dim}, got one of dimension {}",
            v.dimension()
        )));
    }
    debug!(dim, time, "building spectral propagator");

    let mut propagator = ComplexMatrix::zeros(dim, dim)?;
    for (lambda, v) in decomposition.pairs() {
        let phase = Scalar::from_polar(1.0, -lambda * time / REDUCED_PLANCK_CONSTANT);
        propagator = propagator.try_add(&v.outer_product(v).scale(phase))?;
    }
    Ok(propagator)
}

fn require_square(m: &ComplexMatrix, op: &'static str) -> EvolveResult<usize> {
    if !m.is_square() {
        return Err(EvolveError::DimensionMismatch {
            op,
            expected: Shape::new(m.rows(), m.rows()),
            got: m.shape(),
        });
    }
    Ok(m.rows())
}

/// The operator must be square with the state's dimension.
fn require_operator_on(
    operator: &ComplexMatrix,
    state: &ComplexVector,
    op: &'static str,
) -> EvolveResult<usize> {
    let dim = state.dimension();
    if operator.shape() != Shape::new(dim, dim) {
        return Err(EvolveError::DimensionMismatch {
            op,
            expected: Shape::new(dim, dim),
            got: operator.shape(),
        });
    }
    Ok(dim)
}

fn require_same_square(
    a: &ComplexMatrix,
    b: &ComplexMatrix,
    op: &'static str,
) -> EvolveResult<usize> {
    let dim = require_square(a, op)?;
    if b.shape() != a.shape() {
        return Err(EvolveError::DimensionMismatch {
            op,
            expected: a.shape(),
            got: b.shape(),
        });
    }
    Ok(dim)
}
