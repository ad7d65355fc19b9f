use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use approx::AbsDiffEq;

/// Checks if a matrix is approximately equal to an expected shape and row-major data.
/// Panics if shapes differ or any element differs by more than `tolerance`.
pub fn check_matrix_near<T>(
    actual: &Matrix<T>,
    expected_shape: (usize, usize),
    expected_data: &[T],
    tolerance: T,
) where
    T: MatrixElement + AbsDiffEq<Epsilon = T>,
{
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.as_slice().len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.as_slice().iter().zip(expected_data.iter()).enumerate() {
        if !a.abs_diff_eq(e, tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}

/// Returns true when both matrices have the same shape and every pair of
/// elements is within `tolerance`.
pub fn matrices_near<T>(a: &Matrix<T>, b: &Matrix<T>, tolerance: T) -> bool
where
    T: MatrixElement + AbsDiffEq<Epsilon = T>,
{
    a.shape() == b.shape()
        && a
            .as_slice()
            .iter()
            .zip(b.as_slice().iter())
            .all(|(x, y)| x.abs_diff_eq(y, tolerance))
}
