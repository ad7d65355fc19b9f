use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;

/// Swaps rows and columns: the result is `cols x rows` with
/// `result[i][j] == a[j][i]`.
pub fn transpose_op<T: MatrixElement>(a: &Matrix<T>) -> Matrix<T> {
    let mut data = Vec::with_capacity(a.data.len());
    for i in 0..a.cols {
        for j in 0..a.rows {
            data.push(a.data[j * a.cols + i]);
        }
    }
    Matrix {
        data,
        rows: a.cols,
        cols: a.rows,
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// See [`transpose_op`].
    pub fn transpose(&self) -> Matrix<T> {
        transpose_op(self)
    }
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
