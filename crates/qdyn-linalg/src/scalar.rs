//! Complex scalar type.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{LinalgError, LinalgResult};

/// A complex number `re + i·im` with finite `f64` parts.
///
/// Equality is exact and field-wise; callers that need a tolerance must
/// compare [`Scalar::magnitude`] of the difference themselves.
///
/// Addition, subtraction and multiplication are total. Division is only
/// available through [`Scalar::checked_div`], which rejects a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(Complex64);

impl Scalar {
    /// `0 + 0i`.
    pub const ZERO: Scalar = Scalar::new(0.0, 0.0);
    /// `1 + 0i`.
    pub const ONE: Scalar = Scalar::new(1.0, 0.0);
    /// The imaginary unit `0 + 1i`.
    pub const I: Scalar = Scalar::new(0.0, 1.0);

    /// Create a scalar from its real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Scalar(Complex64::new(re, im))
    }

    /// Create a purely real scalar.
    pub const fn from_real(re: f64) -> Self {
        Scalar::new(re, 0.0)
    }

    /// Create a scalar from polar form `r·e^{iθ}`.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Scalar(Complex64::from_polar(r, theta))
    }

    /// Real part.
    pub const fn re(self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    pub const fn im(self) -> f64 {
        self.0.im
    }

    /// `sqrt(re² + im²)`, computed without intermediate overflow.
    pub fn magnitude(self) -> f64 {
        self.0.norm()
    }

    /// `re² + im²`, i.e. the squared magnitude without the square root.
    pub fn norm_sqr(self) -> f64 {
        self.0.norm_sqr()
    }

    /// `atan2(im, re)`, in `(-π, π]`.
    pub fn phase(self) -> f64 {
        self.0.im.atan2(self.0.re)
    }

    /// Complex conjugate `re - i·im`.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Scalar(self.0.conj())
    }

    /// Multiply by a real factor without going through a complex product.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Scalar::new(self.0.re * factor, self.0.im * factor)
    }

    /// Divide by another scalar.
    ///
    /// Fails with [`LinalgError::DivideByZero`] when the divisor's magnitude
    /// is exactly zero. There is no tolerance: a tiny but nonzero divisor is
    /// divided normally.
    pub fn checked_div(self, divisor: Scalar) -> LinalgResult<Scalar> {
        if divisor.magnitude() == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        let (a, b) = (self.0.re, self.0.im);
        let (c, d) = (divisor.0.re, divisor.0.im);
        let denominator = c * c + d * d;
        Ok(Scalar::new(
            (a * c + b * d) / denominator,
            (b * c - a * d) / denominator,
        ))
    }

    /// Divide both parts by a nonzero real. Callers guarantee `divisor != 0`.
    pub(crate) fn unscale(self, divisor: f64) -> Self {
        Scalar::new(self.0.re / divisor, self.0.im / divisor)
    }

    /// Access the underlying `num_complex` value.
    pub const fn as_complex(self) -> Complex64 {
        self.0
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar(value)
    }
}

impl From<Scalar> for Complex64 {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl From<f64> for Scalar {
    fn from(re: f64) -> Self {
        Scalar::from_real(re)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        self.scale(rhs)
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        rhs.scale(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Scalar {
    fn sub_assign(&mut self, rhs: Scalar) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        self.0 *= rhs.0;
    }
}

impl std::iter::Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, z| acc + z)
    }
}
