//! Property-based tests for matrix and vector algebra.

use mini_numpy::math::{Matrix, Vector};
use proptest::prelude::*;

/// Strategy for a matrix with the given shape and small integer entries.
fn matrix_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-50i64..50, rows * cols)
        .prop_map(move |data| Matrix::from_shape_vec((rows, cols), data).unwrap())
}

/// Strategy for a matrix of arbitrary small shape.
fn any_matrix() -> impl Strategy<Value = Matrix<i64>> {
    (1usize..6, 1usize..6).prop_flat_map(|(h, w)| matrix_with_shape(h, w))
}

/// Two matrices of the same shape.
fn matrix_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1usize..6, 1usize..6)
        .prop_flat_map(|(h, w)| (matrix_with_shape(h, w), matrix_with_shape(h, w)))
}

/// Two matrices whose inner dimensions agree.
fn chainable_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1usize..5, 1usize..5, 1usize..5)
        .prop_flat_map(|(h, k, w)| (matrix_with_shape(h, k), matrix_with_shape(k, w)))
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in any_matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn negate_preserves_shape(m in any_matrix()) {
        let (h, w) = m.shape();
        prop_assert_eq!(m.negate().shape(), (h, w));
        prop_assert_eq!(m.transpose().shape(), (w, h));
    }

    #[test]
    fn add_then_subtract_round_trips((a, b) in matrix_pair()) {
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn matmul_shape((a, b) in chainable_pair()) {
        let product = a.matmul(&b).unwrap();
        prop_assert_eq!(product.shape(), (a.nrows(), b.ncols()));
    }

    #[test]
    fn matmul_transpose_identity((a, b) in chainable_pair()) {
        let left = a.matmul(&b).unwrap().transpose();
        let right = b.transpose().matmul(&a.transpose()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn matmul_rejects_mismatched_inner_dims(
        a in matrix_with_shape(2, 3),
        h in 1usize..6,
    ) {
        prop_assume!(h != 3);
        let b = Matrix::from_shape_vec((h, 2), vec![1i64; h * 2]).unwrap();
        let err = a.matmul(&b).unwrap_err();
        prop_assert!(err.is_shape_error());
    }

    #[test]
    fn vector_dot_is_symmetric(
        pair in (1usize..8).prop_flat_map(|n| (
            prop::collection::vec(-100i64..100, n),
            prop::collection::vec(-100i64..100, n),
        ))
    ) {
        let (a, b) = (Vector::new(pair.0), Vector::new(pair.1));
        prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }
}
