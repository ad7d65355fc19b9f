// densemat-core/src/ops/arithmetic/sub.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use crate::ops::{apply_binary_op, apply_unary_op, Operand};
use std::ops::Sub;

/// Subtracts a matrix or a scalar from `a`.
///
/// A matrix operand must have exactly the same shape as `a`, otherwise
/// [`MatrixError::DimensionMismatch`] is returned. A scalar is subtracted from every
/// element.
pub fn sub_op<T: MatrixElement>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    match b {
        Operand::Matrix(m) => apply_binary_op(a, m, "sub", |x, y| x - y),
        Operand::Scalar(s) => Ok(apply_unary_op(a, |x| x - s)),
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Named form of `-`. Accepts `&Matrix<T>` or a scalar `T`.
    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Matrix<T>, MatrixError> {
        sub_op(self, rhs.into())
    }
}

impl<'a, 'b, T: MatrixElement> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        sub_op(self, Operand::Matrix(rhs))
    }
}

macro_rules! impl_sub_scalar {
    ($($t:ty)*) => {
        $(
            impl<'a> Sub<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn sub(self, rhs: $t) -> Matrix<$t> {
                    apply_unary_op(self, |x| x - rhs)
                }
            }
        )*
    };
}

impl_sub_scalar!(i8 i16 i32 i64 i128 isize f32 f64);

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
