//! Physical constants (SI units, CODATA 2018).

use std::f64::consts::PI;

/// Planck constant `h`, in J·s.
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// Reduced Planck constant `ħ = h / 2π`, in J·s.
pub const REDUCED_PLANCK_CONSTANT: f64 = PLANCK_CONSTANT / (2.0 * PI);

/// Electron rest mass, in kg.
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Elementary charge, in C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Speed of light in vacuum, in m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Boltzmann constant, in J/K.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Vacuum permittivity `ε₀`, in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Vacuum permeability `μ₀`, in N/A².
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

/// Energy of one electron-volt, in J.
pub const JOULES_PER_ELECTRON_VOLT: f64 = 1.602_176_634e-19;
