// Linear algebra: dense matrix product.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use log::debug;

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Plain triple loop, O(M * K * N).
///
/// # Errors
/// [`MatrixError::DimensionMismatch`] when `a.cols() != b.rows()`.
pub fn matmul_op<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.cols != b.rows {
        debug!(
            "matmul: inner dimensions differ, {:?} @ {:?}",
            a.shape(),
            b.shape()
        );
        return Err(MatrixError::DimensionMismatch {
            operation: "matmul".to_string(),
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let m = a.rows;
    let k = a.cols; // == b.rows
    let n = b.cols;

    let mut output_data = vec![T::zero(); m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a.data[i * k + l] * b.data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Matrix::from_flat(output_data, m, n)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
