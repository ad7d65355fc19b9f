use thiserror::Error;

/// Structural problems with the shape of a matrix.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ShapeError {
    #[error("Matrix must have at least one row and one column")]
    Empty,

    #[error("Row {row} is empty; every row needs at least one column")]
    EmptyRow { row: usize },

    #[error("Ragged rows: row {row} has {actual} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Data length {len} does not match shape {rows}x{cols}")]
    LengthMismatch { len: usize, rows: usize, cols: usize },

    #[error("Shape {rows}x{cols} is too large to allocate")]
    Overflow { rows: usize, cols: usize },

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Custom error type for densemat.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MatrixError {
    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Dimension mismatch during {operation}: lhs {lhs:?}, rhs {rhs:?}")]
    DimensionMismatch {
        operation: String,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: (usize, usize),
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
