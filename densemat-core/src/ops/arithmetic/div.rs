// densemat-core/src/ops/arithmetic/div.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use crate::ops::{apply_unary_op, Operand};
use log::debug;
use std::ops::Div;

/// Divides every element of `a` by a scalar.
///
/// Uses the native division of `T`. For integer element types this is
/// truncating division, not true division: `[[7]] / 2` gives `[[3]]`, not
/// `[[3.5]]`. Use a float matrix when fractional results are needed.
///
/// # Errors
/// - [`MatrixError::DivisionByZero`] if the scalar is zero.
/// - [`MatrixError::UnsupportedOperation`] if the divisor is a matrix.
pub fn div_op<T: MatrixElement>(a: &Matrix<T>, b: Operand<'_, T>) -> Result<Matrix<T>, MatrixError> {
    match b {
        Operand::Scalar(s) => {
            if s.is_zero() {
                debug!("div: rejected zero divisor for {:?} matrix", a.shape());
                return Err(MatrixError::DivisionByZero);
            }
            Ok(apply_unary_op(a, |x| x / s))
        }
        Operand::Matrix(m) => Err(MatrixError::UnsupportedOperation(format!(
            "division of a {:?} matrix by a {:?} matrix",
            a.shape(),
            m.shape()
        ))),
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Named form of `/`. Only scalar divisors are supported.
    pub fn checked_div<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Matrix<T>, MatrixError> {
        div_op(self, rhs.into())
    }
}

macro_rules! impl_div_scalar {
    ($($t:ty)*) => {
        $(
            impl<'a> Div<$t> for &'a Matrix<$t> {
                type Output = Result<Matrix<$t>, MatrixError>;

                fn div(self, rhs: $t) -> Self::Output {
                    div_op(self, Operand::Scalar(rhs))
                }
            }
        )*
    };
}

impl_div_scalar!(i8 i16 i32 i64 i128 isize f32 f64);

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
