//! Fixed-dimension complex vectors.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Mul};

use crate::error::{LinalgError, LinalgResult, Shape};
use crate::matrix::ComplexMatrix;
use crate::scalar::Scalar;

/// An owned vector of [`Scalar`] with a dimension fixed at construction.
///
/// The dimension is always at least 1. Elements can be mutated in place
/// but the vector can never grow or shrink. `Clone` is a deep copy.
///
/// A `ComplexVector` is not implicitly normalized; call
/// [`ComplexVector::normalize`] when it should represent a unit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")]
pub struct ComplexVector {
    elements: Vec<Scalar>,
}

impl ComplexVector {
    /// Create a vector of `dimension` zeros.
    pub fn zeros(dimension: usize) -> LinalgResult<Self> {
        if dimension == 0 {
            return Err(LinalgError::construction("dimension must be positive"));
        }
        Ok(Self {
            elements: vec![Scalar::ZERO; dimension],
        })
    }

    /// Create a vector that takes ownership of `elements`.
    pub fn from_elements(elements: Vec<Scalar>) -> LinalgResult<Self> {
        if elements.is_empty() {
            return Err(LinalgError::construction("elements cannot be empty"));
        }
        Ok(Self { elements })
    }

    /// The computational basis state `|index⟩` of the given dimension.
    pub fn basis(dimension: usize, index: usize) -> LinalgResult<Self> {
        let mut v = Self::zeros(dimension)?;
        v.set(index, Scalar::ONE)?;
        Ok(v)
    }

    /// Number of elements.
    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    /// Shape of this vector viewed as a column, for error reports.
    pub fn shape(&self) -> Shape {
        Shape::vector(self.dimension())
    }

    /// Read element `index`.
    pub fn get(&self, index: usize) -> LinalgResult<Scalar> {
        self.elements
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                bound: self.dimension(),
            })
    }

    /// Overwrite element `index`.
    pub fn set(&mut self, index: usize, value: Scalar) -> LinalgResult<()> {
        let bound = self.dimension();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, bound })?;
        *slot = value;
        Ok(())
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.elements
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.elements.iter()
    }

    /// Element-wise sum.
    pub fn try_add(&self, other: &ComplexVector) -> LinalgResult<ComplexVector> {
        self.zip_with(other, "vector addition", |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn try_sub(&self, other: &ComplexVector) -> LinalgResult<ComplexVector> {
        self.zip_with(other, "vector subtraction", |a, b| a - b)
    }

    /// Multiply every element by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Scalar) -> ComplexVector {
        ComplexVector {
            elements: self.elements.iter().map(|&e| e * factor).collect(),
        }
    }

    /// A new vector holding the conjugate of each element.
    ///
    /// The receiver is left unchanged.
    #[must_use]
    pub fn conjugate_transpose(&self) -> ComplexVector {
        ComplexVector {
            elements: self.elements.iter().map(|e| e.conjugate()).collect(),
        }
    }

    /// Inner product `Σ conj(self[i]) · other[i]`.
    ///
    /// Conjugate-linear in `self`, linear in `other`.
    pub fn dot(&self, other: &ComplexVector) -> LinalgResult<Scalar> {
        self.check_same_dimension(other, "dot product")?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a.conjugate() * *b)
            .sum())
    }

    /// Outer product `|self⟩⟨other|`: `result[i, j] = self[i] · conj(other[j])`.
    pub fn outer_product(&self, other: &ComplexVector) -> ComplexMatrix {
        ComplexMatrix::from_fn(self.dimension(), other.dimension(), |(i, j)| {
            self.elements[i] * other.elements[j].conjugate()
        })
    }

    /// `Σ |e|²` over all elements.
    pub fn norm_squared(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| {
                let m = e.magnitude();
                m * m
            })
            .sum()
    }

    /// Scale the vector in place to unit norm.
    ///
    /// A vector whose squared norm is exactly zero is left unchanged.
    pub fn normalize(&mut self) {
        let magnitude_squared = self.norm_squared();
        if magnitude_squared == 0.0 {
            return;
        }
        let magnitude = magnitude_squared.sqrt();
        for e in &mut self.elements {
            *e = e.unscale(magnitude);
        }
    }

    fn check_same_dimension(&self, other: &ComplexVector, op: &'static str) -> LinalgResult<()> {
        if self.dimension() != other.dimension() {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &ComplexVector,
        op: &'static str,
        f: impl Fn(Scalar, Scalar) -> Scalar,
    ) -> LinalgResult<ComplexVector> {
        self.check_same_dimension(other, op)?;
        Ok(ComplexVector {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl TryFrom<Vec<Scalar>> for ComplexVector {
    type Error = LinalgError;

    fn try_from(elements: Vec<Scalar>) -> LinalgResult<Self> {
        Self::from_elements(elements)
    }
}

impl From<ComplexVector> for Vec<Scalar> {
    fn from(vector: ComplexVector) -> Self {
        vector.elements
    }
}

impl Index<usize> for ComplexVector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.elements[index]
    }
}

impl IndexMut<usize> for ComplexVector {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.elements[index]
    }
}

impl Mul<Scalar> for &ComplexVector {
    type Output = ComplexVector;

    fn mul(self, rhs: Scalar) -> ComplexVector {
        self.scale(rhs)
    }
}

impl Mul<&ComplexVector> for Scalar {
    type Output = ComplexVector;

    fn mul(self, rhs: &ComplexVector) -> ComplexVector {
        rhs.scale(self)
    }
}

impl<'a> IntoIterator for &'a ComplexVector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
