//! # Matrix Operations Module (`ops`)
//!
//! Operations are grouped by what they do:
//!
//! - [`arithmetic`]: elementwise and scalar arithmetic (add, sub, mul, div, neg, abs).
//! - [`linalg`]: linear algebra (matmul, transpose, determinant).
//! - [`traits`]: the numeric bound shared by every operation.
//!
//! Each binary operation has a core `xxx_op` function taking an [`Operand`],
//! a `checked_xxx` method on [`Matrix`], and `std::ops` impls for operator syntax.

pub mod arithmetic;
pub mod linalg;
pub mod traits;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::numeric::MatrixElement;
use log::debug;

/// The right-hand side of a binary matrix operation.
///
/// Built at the call boundary through `From`, so `a.checked_add(&b)` and
/// `a.checked_add(2.0)` both work. Types without a `From` impl are rejected by
/// the compiler; operand kinds an operation does not support are reported as
/// [`MatrixError::UnsupportedOperation`].
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    Matrix(&'a Matrix<T>),
    Scalar(T),
}

impl<'a, T: MatrixElement> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty)*) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(s: $t) -> Self {
                    Operand::Scalar(s)
                }
            }
        )*
    };
}

impl_scalar_operand!(i8 i16 i32 i64 i128 isize f32 f64);

/// Applies `op` to every element, producing a matrix of the same shape.
pub(crate) fn apply_unary_op<T, F>(a: &Matrix<T>, op: F) -> Matrix<T>
where
    T: MatrixElement,
    F: Fn(T) -> T,
{
    let data: Vec<T> = a.data.iter().map(|&x| op(x)).collect();
    // Shape is taken from a valid matrix, so the invariants carry over.
    Matrix {
        data,
        rows: a.rows,
        cols: a.cols,
    }
}

/// Checks that `a` and `b` have identical shapes.
pub(crate) fn check_same_shape<T: MatrixElement>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op_name: &str,
) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        debug!(
            "{}: rejected operands with shapes {:?} and {:?}",
            op_name,
            a.shape(),
            b.shape()
        );
        return Err(MatrixError::DimensionMismatch {
            operation: op_name.to_string(),
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Combines two same-shaped matrices element by element.
pub(crate) fn apply_binary_op<T, F>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op_name: &str,
    op: F,
) -> Result<Matrix<T>, MatrixError>
where
    T: MatrixElement,
    F: Fn(T, T) -> T,
{
    check_same_shape(a, b, op_name)?;
    let data: Vec<T> = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::from_flat(data, a.rows, a.cols)
}
