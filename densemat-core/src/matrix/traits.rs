// src/matrix/traits.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use std::fmt;
use std::ops::Index;

// --- Trait Implementations ---

impl<T: MatrixElement> PartialEq for Matrix<T> {
    /// Structural equality: same shape and exactly equal elements.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    /// Nested-sequence form, e.g. `Matrix([[1, 2], [3, 4]])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(")?;
        f.debug_list().entries(self.data.chunks_exact(self.cols)).finish()?;
        write!(f, ")")
    }
}

impl<T: MatrixElement> fmt::Display for Matrix<T> {
    /// Tab-separated columns, newline-separated rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

impl<T: MatrixElement> Index<usize> for Matrix<T> {
    type Output = [T];

    /// Panics when `index` is out of range. Use [`Matrix::row`] for a checked lookup.
    fn index(&self, index: usize) -> &[T] {
        match self.row(index) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: MatrixElement> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(data: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::new(data)
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
