// densemat-core/src/ops/arithmetic/add.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use crate::ops::{apply_binary_op, apply_unary_op, Operand};
use std::ops::Add;

/// Adds a matrix or a scalar to `a`.
///
/// A matrix operand must have exactly the same shape as `a`, otherwise
/// [`MatrixError::DimensionMismatch`] is returned. A scalar is added to every
/// element.
pub fn add_op<T: MatrixElement>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    match b {
        Operand::Matrix(m) => apply_binary_op(a, m, "add", |x, y| x + y),
        Operand::Scalar(s) => Ok(apply_unary_op(a, |x| x + s)),
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Named form of `+`. Accepts `&Matrix<T>` or a scalar `T`.
    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Matrix<T>, MatrixError> {
        add_op(self, rhs.into())
    }
}

impl<'a, 'b, T: MatrixElement> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        add_op(self, Operand::Matrix(rhs))
    }
}

macro_rules! impl_add_scalar {
    ($($t:ty)*) => {
        $(
            impl<'a> Add<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn add(self, rhs: $t) -> Matrix<$t> {
                    apply_unary_op(self, |x| x + rhs)
                }
            }
        )*
    };
}

impl_add_scalar!(i8 i16 i32 i64 i128 isize f32 f64);

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
