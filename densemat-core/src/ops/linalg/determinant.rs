// src/ops/linalg/determinant.rs

use crate::error::{MatrixError, ShapeError};
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use log::{trace, warn};

/// Square inputs larger than this log a warning before the determinant is computed.
pub const DETERMINANT_WARN_DIM: usize = 10;

/// Computes the determinant by Laplace (cofactor) expansion along the first row.
///
/// 1x1 and 2x2 matrices are handled directly. Larger matrices recurse on the
/// minors of the first row, so the cost grows factorially with the size. This
/// is intended for small matrices only; there is no pivoting or LU shortcut,
/// and the result is exactly what native arithmetic on `T` produces.
///
/// # Errors
/// [`ShapeError::NotSquare`] when `rows != cols`.
pub fn determinant_op<T: MatrixElement>(a: &Matrix<T>) -> Result<T, MatrixError> {
    if !a.is_square() {
        return Err(ShapeError::NotSquare {
            rows: a.rows,
            cols: a.cols,
        }
        .into());
    }
    if a.rows > DETERMINANT_WARN_DIM {
        warn!(
            "determinant: cofactor expansion of a {}x{} matrix is factorial in cost",
            a.rows, a.cols
        );
    }
    Ok(cofactor_expansion(a))
}

fn cofactor_expansion<T: MatrixElement>(a: &Matrix<T>) -> T {
    let n = a.rows;
    match n {
        1 => a.data[0],
        2 => a.data[0] * a.data[3] - a.data[1] * a.data[2],
        _ => {
            trace!("determinant: expanding {}x{} along row 0", n, n);
            let mut det = T::zero();
            for c in 0..n {
                let minor = minor_of(a, 0, c);
                let term = a.data[c] * cofactor_expansion(&minor);
                // (-1)^c, positive at column 0
                if c % 2 == 0 {
                    det = det + term;
                } else {
                    det = det - term;
                }
            }
            det
        }
    }
}

/// Copies `a` without row `skip_row` and column `skip_col`, keeping the
/// remaining order. Caller guarantees both indices are in range and `a` is at
/// least 2x2.
fn minor_of<T: MatrixElement>(a: &Matrix<T>, skip_row: usize, skip_col: usize) -> Matrix<T> {
    let mut data = Vec::with_capacity((a.rows - 1) * (a.cols - 1));
    for (i, row) in a.iter_rows().enumerate() {
        if i == skip_row {
            continue;
        }
        for (j, &value) in row.iter().enumerate() {
            if j != skip_col {
                data.push(value);
            }
        }
    }
    Matrix {
        data,
        rows: a.rows - 1,
        cols: a.cols - 1,
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// See [`determinant_op`].
    pub fn determinant(&self) -> Result<T, MatrixError> {
        determinant_op(self)
    }

    /// Returns the submatrix left after deleting `row` and `col`.
    ///
    /// # Errors
    /// - [`MatrixError::IndexOutOfBounds`] if `row` or `col` is out of range.
    /// - [`ShapeError::Empty`] if the result would have no rows or columns.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![row, col],
                shape: self.shape(),
            });
        }
        if self.rows < 2 || self.cols < 2 {
            return Err(ShapeError::Empty.into());
        }
        Ok(minor_of(self, row, col))
    }
}

#[cfg(test)]
#[path = "determinant_test.rs"]
mod tests;
