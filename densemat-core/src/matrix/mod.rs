// src/matrix/mod.rs

use crate::error::{MatrixError, ShapeError};
use crate::ops::traits::numeric::MatrixElement;

mod accessors;
pub mod create;
mod traits;

pub use create::{full, identity, zeros};

/// A dense, rectangular matrix of numbers.
///
/// Elements are stored row-major in a single buffer owned exclusively by the
/// instance. The shape is fixed at construction, and every arithmetic
/// operation returns a new `Matrix` with its own storage, so operands are never
/// modified. The only mutator, [`Matrix::set`], needs `&mut self`.
#[derive(Clone)]
pub struct Matrix<T> {
    /// Row-major elements, `rows * cols` long.
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: MatrixElement> Matrix<T> {
    /// Creates a matrix from a vector of rows.
    ///
    /// The nested vectors are consumed, so the caller keeps no handle through
    /// which the matrix could later be changed.
    ///
    /// # Errors
    /// Returns [`ShapeError::Empty`] when `data` has no rows,
    /// [`ShapeError::EmptyRow`] when any row has no columns, and
    /// [`ShapeError::Ragged`] when the rows differ in length.
    pub fn new(data: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = match data.first() {
            Some(first) => first.len(),
            None => return Err(ShapeError::Empty.into()),
        };

        for (i, row) in data.iter().enumerate() {
            if row.is_empty() {
                return Err(ShapeError::EmptyRow { row: i }.into());
            }
            if row.len() != cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                }
                .into());
            }
        }

        let flat: Vec<T> = data.into_iter().flatten().collect();
        Self::from_flat(flat, rows, cols)
    }

    /// Creates a matrix from a row-major buffer and a shape.
    ///
    /// All operations build their results through this constructor.
    pub fn from_flat(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty.into());
        }
        if data.len() != checked_numel::<T>(rows, cols)? {
            return Err(ShapeError::LengthMismatch {
                len: data.len(),
                rows,
                cols,
            }
            .into());
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Returns a deep copy whose storage is independent of `self`.
    pub fn copy(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        data.extend(self.data.iter().copied());
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Returns `rows * cols`, or [`ShapeError::Overflow`] when that many elements
/// of `T` cannot be addressed by a single allocation.
pub(crate) fn checked_numel<T>(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    let numel = rows
        .checked_mul(cols)
        .filter(|n| {
            n.checked_mul(std::mem::size_of::<T>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ShapeError::Overflow { rows, cols })?;
    Ok(numel)
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
