//! `qdyn-evolve` — quantum state time evolution.
//!
//! Evolves a state vector under a time-independent Hamiltonian by
//! approximating the propagator `exp(-i H t / ħ)` with a truncated power
//! series, and computes derived quantities:
//!
//! - [`time_evolve`] / [`TaylorEvolution`]: truncated-series propagator
//! - [`time_evolve_eigen`]: eigen-based propagator with an explicit,
//!   reported fallback to the series when no [`EigenSolver`] is available
//! - [`expectation_value`], [`probability_of_measuring_state`]
//! - [`commutator`], [`anti_commutator`]
//!
//! Hamiltonians are in joules and times in seconds; see [`constants`].
//!
//! # Quick start
//!
//! ```rust
//! use qdyn_evolve::constants::REDUCED_PLANCK_CONSTANT;
//! use qdyn_evolve::{expectation_value, time_evolve};
//! use qdyn_linalg::{ComplexMatrix, ComplexVector, Scalar};
//!
//! // H = ħ·σx, so |0⟩ → |1⟩ after t = π/2.
//! let h = ComplexMatrix::from_rows(vec![
//!     vec![Scalar::ZERO, Scalar::ONE],
//!     vec![Scalar::ONE, Scalar::ZERO],
//! ])
//! .unwrap()
//! .scale_real(REDUCED_PLANCK_CONSTANT);
//! let psi0 = ComplexVector::basis(2, 0).unwrap();
//!
//! let psi = time_evolve(&psi0, &h, std::f64::consts::FRAC_PI_2, 40).unwrap();
//! let z = ComplexMatrix::from_diagonal(&[Scalar::ONE, Scalar::from_real(-1.0)]).unwrap();
//! let ez = expectation_value(&psi, &z).unwrap();
//! assert!((ez.re() + 1.0).abs() < 1e-9);
//! ```

pub mod constants;
pub mod eigen;
pub mod error;
pub mod evolution;

pub use eigen::{EigenDecomposition, EigenSolver, UnavailableEigenSolver};
pub use error::{EvolveError, EvolveResult};
pub use evolution::{
    DEFAULT_SERIES_STEPS, Evolution, EvolutionMethod, TaylorEvolution, anti_commutator,
    commutator, expectation_value, normalize_state, probability_of_measuring_state,
    solve_eigenvalue_problem, solve_eigenvalue_problem_with, time_evolve, time_evolve_default,
    time_evolve_eigen, time_evolve_eigen_with,
};
