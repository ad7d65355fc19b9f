use crate::matrix::Matrix;
use crate::ops::apply_unary_op;
use crate::ops::traits::numeric::MatrixElement;
use std::ops::Neg;

// --- Forward Operation ---

/// Implements unary negation for a Matrix reference.
impl<'a, T: MatrixElement> Neg for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        apply_unary_op(self, |x| -x)
    }
}

/// Implements unary negation for an owned Matrix.
impl<T: MatrixElement> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
