//! Dense complex matrices.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Mul};

use crate::error::{LinalgError, LinalgResult, Shape};
use crate::scalar::Scalar;
use crate::vector::ComplexVector;

/// An owned, row-major matrix of [`Scalar`] with a shape fixed at construction.
///
/// Both axes are at least 1. Elements can be mutated in place; the shape
/// cannot change. Constructors copy or take ownership of the caller's data,
/// so a matrix never aliases external storage, and `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Scalar>", into = "Array2<Scalar>")]
pub struct ComplexMatrix {
    data: Array2<Scalar>,
}

impl ComplexMatrix {
    /// Create a `rows × columns` matrix of zeros.
    pub fn zeros(rows: usize, columns: usize) -> LinalgResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(LinalgError::construction(
                "rows and columns must be positive",
            ));
        }
        Ok(Self {
            data: Array2::from_elem((rows, columns), Scalar::ZERO),
        })
    }

    /// Create a matrix from a list of rows.
    ///
    /// Rejects an empty outer list, empty rows and rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> LinalgResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(LinalgError::construction(
                "matrix elements cannot be empty",
            ));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != n_cols) {
            return Err(LinalgError::construction(format!(
                "row {bad} has {} elements, expected {n_cols}",
                rows[bad].len()
            )));
        }
        let flat: Vec<Scalar> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| LinalgError::construction(e.to_string()))?;
        Ok(Self { data })
    }

    /// Wrap an existing `ndarray` array, rejecting empty axes.
    pub fn from_array(data: Array2<Scalar>) -> LinalgResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(LinalgError::construction(
                "matrix elements cannot be empty",
            ));
        }
        // Force standard layout so row-major iteration order holds.
        Ok(Self {
            data: data.as_standard_layout().into_owned(),
        })
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> LinalgResult<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[(i, i)] = Scalar::ONE;
        }
        Ok(m)
    }

    /// A square matrix with `diagonal` on its main diagonal and zeros elsewhere.
    pub fn from_diagonal(diagonal: &[Scalar]) -> LinalgResult<Self> {
        let mut m = Self::zeros(diagonal.len(), diagonal.len())?;
        for (i, &d) in diagonal.iter().enumerate() {
            m.data[(i, i)] = d;
        }
        Ok(m)
    }

    /// Build a matrix from a function of `(row, column)`. Both sizes must be
    /// nonzero; only used internally where that already holds.
    pub(crate) fn from_fn(
        rows: usize,
        columns: usize,
        f: impl FnMut((usize, usize)) -> Scalar,
    ) -> Self {
        Self {
            data: Array2::from_shape_fn((rows, columns), f),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// `rows × columns`.
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.columns())
    }

    /// True if `rows == columns`.
    pub fn is_square(&self) -> bool {
        self.rows() == self.columns()
    }

    /// Read element `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> LinalgResult<Scalar> {
        self.check_index(row, column)?;
        Ok(self.data[(row, column)])
    }

    /// Overwrite element `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: Scalar) -> LinalgResult<()> {
        self.check_index(row, column)?;
        self.data[(row, column)] = value;
        Ok(())
    }

    /// Borrow the backing array.
    pub fn as_array(&self) -> &Array2<Scalar> {
        &self.data
    }

    /// Element-wise sum; shapes must be identical.
    pub fn try_add(&self, other: &ComplexMatrix) -> LinalgResult<ComplexMatrix> {
        self.check_same_shape(other, "matrix addition")?;
        Ok(Self {
            data: ndarray::Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| a + b),
        })
    }

    /// Element-wise difference; shapes must be identical.
    pub fn try_sub(&self, other: &ComplexMatrix) -> LinalgResult<ComplexMatrix> {
        self.check_same_shape(other, "matrix subtraction")?;
        Ok(Self {
            data: ndarray::Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| a - b),
        })
    }

    /// Matrix product `self · other`; requires `self.columns == other.rows`.
    pub fn matmul(&self, other: &ComplexMatrix) -> LinalgResult<ComplexMatrix> {
        if self.columns() != other.rows() {
            return Err(LinalgError::DimensionMismatch {
                op: "matrix multiplication",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let inner = self.columns();
        Ok(Self::from_fn(self.rows(), other.columns(), |(i, j)| {
            let mut sum = Scalar::ZERO;
            for k in 0..inner {
                sum += self.data[(i, k)] * other.data[(k, j)];
            }
            sum
        }))
    }

    /// Matrix-vector product `self · vector`; requires
    /// `columns == vector.dimension()`.
    pub fn apply(&self, vector: &ComplexVector) -> LinalgResult<ComplexVector> {
        if self.columns() != vector.dimension() {
            return Err(LinalgError::DimensionMismatch {
                op: "matrix-vector multiplication",
                lhs: self.shape(),
                rhs: vector.shape(),
            });
        }
        let elements = self
            .data
            .rows()
            .into_iter()
            .map(|row| {
                let mut sum = Scalar::ZERO;
                for (a, b) in row.iter().zip(vector.iter()) {
                    sum += *a * *b;
                }
                sum
            })
            .collect();
        ComplexVector::from_elements(elements)
    }

    /// Multiply every element by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Scalar) -> ComplexMatrix {
        Self {
            data: self.data.mapv(|e| e * factor),
        }
    }

    /// Multiply every element by a real `factor`.
    #[must_use]
    pub fn scale_real(&self, factor: f64) -> ComplexMatrix {
        Self {
            data: self.data.mapv(|e| e.scale(factor)),
        }
    }

    /// The `columns × rows` matrix with `result[j, i] = conj(self[i, j])`.
    #[must_use]
    pub fn conjugate_transpose(&self) -> ComplexMatrix {
        Self::from_fn(self.columns(), self.rows(), |(j, i)| {
            self.data[(i, j)].conjugate()
        })
    }

    /// Sum of the diagonal; fails on a non-square matrix.
    pub fn trace(&self) -> LinalgResult<Scalar> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                op: "trace",
                lhs: self.shape(),
                rhs: Shape::new(self.columns(), self.rows()),
            });
        }
        Ok(self.data.diag().iter().copied().sum())
    }

    /// True if the matrix is square and every `|self[i,j] - conj(self[j,i])|`
    /// is at most `tolerance`.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows();
        (0..n).all(|i| {
            (i..n).all(|j| {
                (self.data[(i, j)] - self.data[(j, i)].conjugate()).magnitude() <= tolerance
            })
        })
    }

    fn check_index(&self, row: usize, column: usize) -> LinalgResult<()> {
        if row >= self.rows() {
            return Err(LinalgError::IndexOutOfRange {
                index: row,
                bound: self.rows(),
            });
        }
        if column >= self.columns() {
            return Err(LinalgError::IndexOutOfRange {
                index: column,
                bound: self.columns(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &ComplexMatrix, op: &'static str) -> LinalgResult<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Array2<Scalar>> for ComplexMatrix {
    type Error = LinalgError;

    fn try_from(data: Array2<Scalar>) -> LinalgResult<Self> {
        Self::from_array(data)
    }
}

impl From<ComplexMatrix> for Array2<Scalar> {
    fn from(matrix: ComplexMatrix) -> Self {
        matrix.data
    }
}

impl Index<(usize, usize)> for ComplexMatrix {
    type Output = Scalar;

    fn index(&self, index: (usize, usize)) -> &Scalar {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for ComplexMatrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Scalar {
        &mut self.data[index]
    }
}

impl Mul<Scalar> for &ComplexMatrix {
    type Output = ComplexMatrix;

    fn mul(self, rhs: Scalar) -> ComplexMatrix {
        self.scale(rhs)
    }
}

impl Mul<&ComplexMatrix> for Scalar {
    type Output = ComplexMatrix;

    fn mul(self, rhs: &ComplexMatrix) -> ComplexMatrix {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(rows: &[&[f64]]) -> ComplexMatrix {
        ComplexMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&x| Scalar::from_real(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_shape_rejected() {
        assert!(ComplexMatrix::zeros(0, 2).is_err());
        assert!(ComplexMatrix::zeros(2, 0).is_err());
        assert!(ComplexMatrix::identity(0).is_err());
        assert!(ComplexMatrix::from_rows(vec![]).is_err());
        assert!(ComplexMatrix::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ComplexMatrix::from_rows(vec![
            vec![Scalar::ONE, Scalar::ONE],
            vec![Scalar::ONE],
        ])
        .unwrap_err();
        assert!(matches!(err, LinalgError::Construction { .. }));
    }

    #[test]
    fn test_identity() {
        let id = ComplexMatrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { Scalar::ONE } else { Scalar::ZERO };
                assert_eq!(id[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_matmul() {
        let a = real(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = real(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(a.matmul(&b).unwrap(), real(&[&[19.0, 22.0], &[43.0, 50.0]]));
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = real(&[&[1.0, 2.0, 3.0]]);
        let b = real(&[&[1.0], &[1.0], &[1.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), Shape::new(1, 1));
        assert_eq!(c[(0, 0)], Scalar::from_real(6.0));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut m = ComplexMatrix::zeros(2, 3).unwrap();
        m.set(1, 2, Scalar::I).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), Scalar::I);
        assert_eq!(
            m.get(2, 0),
            Err(LinalgError::IndexOutOfRange { index: 2, bound: 2 })
        );
        assert_eq!(
            m.set(0, 3, Scalar::ONE),
            Err(LinalgError::IndexOutOfRange { index: 3, bound: 3 })
        );
    }

    #[test]
    fn test_trace_and_hermitian() {
        let h = ComplexMatrix::from_rows(vec![
            vec![Scalar::ONE, Scalar::new(0.0, -1.0)],
            vec![Scalar::I, Scalar::from_real(-1.0)],
        ])
        .unwrap();
        assert_eq!(h.trace().unwrap(), Scalar::ZERO);
        assert!(h.is_hermitian(0.0));
        assert!(!real(&[&[0.0, 1.0], &[0.0, 0.0]]).is_hermitian(1e-12));
        assert!(real(&[&[1.0, 2.0]]).trace().is_err());
    }

    #[test]
    fn test_from_array_copies_into_standard_layout() {
        let arr = Array2::from_shape_fn((2, 3), |(i, j)| Scalar::from_real((i * 3 + j) as f64));
        let m = ComplexMatrix::from_array(arr.reversed_axes()).unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m[(2, 1)], Scalar::from_real(5.0));
    }
}
