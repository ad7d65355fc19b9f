//! # densemat-core
//!
//! A small dense matrix value type. Every operation returns a freshly
//! allocated [`Matrix`]; operands are never mutated.
//!
//! ```
//! use densemat_core::Matrix;
//!
//! let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::new(vec![vec![5, 6], vec![7, 8]]).unwrap();
//! let c = (&a * &b).unwrap();
//! assert_eq!(c, Matrix::new(vec![vec![19, 22], vec![43, 50]]).unwrap());
//! assert_eq!(a.determinant().unwrap(), -2);
//! ```

pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

pub use error::{MatrixError, ShapeError};
pub use matrix::Matrix;
pub use ops::traits::numeric::MatrixElement;
pub use ops::Operand;
pub use ops::linalg::determinant::DETERMINANT_WARN_DIM;
// Re-export traits required by public functions/structs
pub use num_traits;
