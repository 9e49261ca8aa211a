//! Tests for vector and matrix algebra.

use qdyn_linalg::{ComplexMatrix, ComplexVector, LinalgError, Scalar, Shape};

fn c(re: f64, im: f64) -> Scalar {
    Scalar::new(re, im)
}

fn vector(elements: &[Scalar]) -> ComplexVector {
    ComplexVector::from_elements(elements.to_vec()).unwrap()
}

fn matrix(rows: &[&[Scalar]]) -> ComplexMatrix {
    ComplexMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

#[test]
fn dividing_one_by_zero_fails() {
    let result = Scalar::new(1.0, 0.0).checked_div(Scalar::new(0.0, 0.0));
    assert_eq!(result, Err(LinalgError::DivideByZero));
}

#[test]
fn division_is_exact_for_small_integers() {
    let q = Scalar::new(-7.0, 24.0).checked_div(Scalar::new(3.0, 4.0)).unwrap();
    assert_eq!(q, Scalar::new(3.0, 4.0));
}

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

#[test]
fn vector_add_and_sub() {
    let a = vector(&[c(1.0, 1.0), c(2.0, 0.0)]);
    let b = vector(&[c(0.5, -1.0), c(0.0, 3.0)]);
    assert_eq!(a.try_add(&b).unwrap(), vector(&[c(1.5, 0.0), c(2.0, 3.0)]));
    assert_eq!(a.try_sub(&b).unwrap(), vector(&[c(0.5, 2.0), c(2.0, -3.0)]));
}

#[test]
fn vector_dimension_mismatch() {
    let a = ComplexVector::zeros(2).unwrap();
    let b = ComplexVector::zeros(3).unwrap();
    let err = a.try_add(&b).unwrap_err();
    assert_eq!(
        err,
        LinalgError::DimensionMismatch {
            op: "vector addition",
            lhs: Shape::vector(2),
            rhs: Shape::vector(3),
        }
    );
    assert!(a.try_sub(&b).is_err());
    assert!(a.dot(&b).is_err());
}

#[test]
fn scalar_vector_multiplication_commutes() {
    let v = vector(&[c(1.0, 2.0), c(-3.0, 0.5)]);
    let s = c(0.0, 2.0);
    assert_eq!(&v * s, s * &v);
    assert_eq!(&v * s, vector(&[c(-4.0, 2.0), c(-1.0, -6.0)]));
}

#[test]
fn conjugate_transpose_leaves_receiver_untouched() {
    let v = vector(&[c(1.0, 2.0), c(3.0, -4.0)]);
    let ct = v.conjugate_transpose();
    assert_eq!(ct, vector(&[c(1.0, -2.0), c(3.0, 4.0)]));
    assert_eq!(v, vector(&[c(1.0, 2.0), c(3.0, -4.0)]));
}

#[test]
fn normalize_gives_unit_norm() {
    let mut v = vector(&[c(1.0, 1.0), c(2.0, -1.0), c(0.0, 3.0)]);
    v.normalize();
    assert!((v.norm_squared() - 1.0).abs() < 1e-12);
}

#[test]
fn clone_is_independent() {
    let mut a = vector(&[c(1.0, 0.0), c(0.0, 0.0)]);
    let b = a.clone();
    a[1] = Scalar::I;
    assert_eq!(b[1], Scalar::ZERO);
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

#[test]
fn multiplying_2x3_by_2x2_fails() {
    let a = ComplexMatrix::zeros(2, 3).unwrap();
    let b = ComplexMatrix::zeros(2, 2).unwrap();
    assert!(matches!(
        a.matmul(&b),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn matrix_add_requires_same_shape() {
    let a = ComplexMatrix::zeros(2, 3).unwrap();
    let b = ComplexMatrix::zeros(3, 2).unwrap();
    assert!(a.try_add(&b).is_err());
    assert!(a.try_sub(&b).is_err());
    assert_eq!(a.try_add(&a).unwrap(), a);
}

#[test]
fn matrix_vector_product() {
    let y = matrix(&[&[Scalar::ZERO, c(0.0, -1.0)], &[Scalar::I, Scalar::ZERO]]);
    let up = ComplexVector::basis(2, 0).unwrap();
    assert_eq!(y.apply(&up).unwrap(), vector(&[Scalar::ZERO, Scalar::I]));

    let wrong = ComplexVector::zeros(3).unwrap();
    assert!(matches!(
        y.apply(&wrong),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn matrix_conjugate_transpose_swaps_shape() {
    let m = matrix(&[&[c(1.0, 1.0), c(2.0, 0.0), c(0.0, 3.0)]]);
    let d = m.conjugate_transpose();
    assert_eq!(d.shape(), Shape::new(3, 1));
    assert_eq!(d[(0, 0)], c(1.0, -1.0));
    assert_eq!(d[(2, 0)], c(0.0, -3.0));
}

#[test]
fn scalar_matrix_multiplication_commutes() {
    let m = matrix(&[&[c(1.0, 0.0), c(0.0, 1.0)], &[c(2.0, 2.0), c(-1.0, 0.0)]]);
    let s = c(0.5, -0.5);
    assert_eq!(&m * s, s * &m);
}

#[test]
fn outer_product_of_basis_states_is_projector() {
    let zero = ComplexVector::basis(2, 0).unwrap();
    let projector = zero.outer_product(&zero);
    assert_eq!(projector, ComplexMatrix::from_diagonal(&[Scalar::ONE, Scalar::ZERO]).unwrap());
}

#[test]
fn matrix_clone_is_deep() {
    let mut a = ComplexMatrix::identity(2).unwrap();
    let b = a.clone();
    a[(0, 1)] = Scalar::I;
    assert_eq!(b[(0, 1)], Scalar::ZERO);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn deserializing_empty_vector_is_rejected() {
    let result: Result<ComplexVector, _> = serde_json::from_str("[]");
    assert!(result.is_err());
}

#[test]
fn deserializing_matrix_with_empty_axis_is_rejected() {
    for json in [
        r#"{"v":1,"dim":[0,2],"data":[]}"#,
        r#"{"v":1,"dim":[2,0],"data":[]}"#,
    ] {
        let result: Result<ComplexMatrix, _> = serde_json::from_str(json);
        assert!(result.is_err(), "accepted {json}");
    }
    assert!(matches!(
        ComplexMatrix::try_from(ndarray::Array2::from_elem((0, 2), Scalar::ZERO)),
        Err(LinalgError::Construction { .. })
    ));
}

#[test]
fn deserializing_matrix_keeps_shape() {
    let json = r#"{"v":1,"dim":[1,2],"data":[[1.0,0.0],[0.0,1.0]]}"#;
    let m: ComplexMatrix = serde_json::from_str(json).unwrap();
    assert_eq!(m.shape(), Shape::new(1, 2));
    assert_eq!(m[(0, 1)], Scalar::I);
}

#[test]
fn vector_serializes_as_pairs() {
    let v = vector(&[c(1.0, -2.0)]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[[1.0,-2.0]]");
    let back: ComplexVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
