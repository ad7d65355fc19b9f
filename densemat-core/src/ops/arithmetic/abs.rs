use crate::matrix::Matrix;
use crate::ops::apply_unary_op;
use crate::ops::traits::numeric::MatrixElement;

impl<T: MatrixElement> Matrix<T> {
    /// Returns a matrix holding the absolute value of every element.
    pub fn abs(&self) -> Matrix<T> {
        apply_unary_op(self, |x| x.abs())
    }
}
