// src/matrix/create.rs

use crate::error::MatrixError;
use crate::matrix::{checked_numel, Matrix};
use crate::ops::traits::numeric::MatrixElement;

/// Creates a `rows x cols` matrix filled with zeros.
pub fn zeros<T: MatrixElement>(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError> {
    full(rows, cols, T::zero())
}

/// Creates a `rows x cols` matrix with every element set to `value`.
pub fn full<T: MatrixElement>(rows: usize, cols: usize, value: T) -> Result<Matrix<T>, MatrixError> {
    let numel = checked_numel::<T>(rows, cols)?;
    Matrix::from_flat(vec![value; numel], rows, cols)
}

/// Creates the `n x n` identity matrix.
pub fn identity<T: MatrixElement>(n: usize) -> Result<Matrix<T>, MatrixError> {
    let numel = checked_numel::<T>(n, n)?;
    let mut data = vec![T::zero(); numel];
    for i in 0..n {
        data[i * n + i] = T::one();
    }
    Matrix::from_flat(data, n, n)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
