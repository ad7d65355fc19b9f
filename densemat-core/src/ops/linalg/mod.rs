// src/ops/linalg/mod.rs

pub mod determinant;
pub mod matmul;
pub mod transpose;

pub use determinant::determinant_op;
pub use matmul::matmul_op;
pub use transpose::transpose_op;
