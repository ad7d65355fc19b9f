// densemat-core/src/ops/arithmetic/mul.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::linalg::matmul::matmul_op;
use crate::ops::traits::numeric::MatrixElement;
use crate::ops::{apply_unary_op, Operand};
use std::ops::Mul;

/// Multiplies `a` by a matrix or a scalar.
///
/// A matrix operand gives the matrix product (see [`matmul_op`]); a scalar
/// scales every element.
pub fn mul_op<T: MatrixElement>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    match b {
        Operand::Matrix(m) => matmul_op(a, m),
        Operand::Scalar(s) => Ok(apply_unary_op(a, |x| x * s)),
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Named form of `*`. Accepts `&Matrix<T>` or a scalar `T`.
    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Matrix<T>, MatrixError> {
        mul_op(self, rhs.into())
    }
}

impl<'a, 'b, T: MatrixElement> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        matmul_op(self, rhs)
    }
}

macro_rules! impl_mul_scalar {
    ($($t:ty)*) => {
        $(
            impl<'a> Mul<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Matrix<$t> {
                    apply_unary_op(self, |x| x * rhs)
                }
            }
        )*
    };
}

impl_mul_scalar!(i8 i16 i32 i64 i128 isize f32 f64);

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
