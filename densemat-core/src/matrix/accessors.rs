// src/matrix/accessors.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;

impl<T: MatrixElement> Matrix<T> {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns row `index` as a slice.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfBounds`] when `index >= rows`.
    pub fn row(&self, index: usize) -> Result<&[T], MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![index],
                shape: self.shape(),
            });
        }
        let start = index * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// Requires exclusive access, so no other instance or outstanding borrow
    /// can observe the change.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Returns the row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies the elements out as a vector of rows.
    pub fn to_vec(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: vec![row, col],
                shape: self.shape(),
            });
        }
        Ok(row * self.cols + col)
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
