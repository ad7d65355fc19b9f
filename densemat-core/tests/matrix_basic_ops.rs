use densemat_core::{Matrix, MatrixError, ShapeError};

// Include the common helper module
mod common;
use common::create_test_matrix;

#[test]
fn test_matrix_product_end_to_end() {
    let a = create_test_matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = create_test_matrix(vec![vec![5, 6], vec![7, 8]]);
    let product = (&a * &b).unwrap();
    assert_eq!(product, create_test_matrix(vec![vec![19, 22], vec![43, 50]]));
}

#[test]
fn test_transpose_end_to_end() {
    let a = create_test_matrix(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(a.transpose(), create_test_matrix(vec![vec![1, 3], vec![2, 4]]));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Matrix::<f64>::new(vec![]),
        Err(MatrixError::Shape(ShapeError::Empty))
    ));
    assert!(matches!(
        Matrix::<f64>::new(vec![vec![1.0], vec![2.0, 3.0]]),
        Err(MatrixError::Shape(ShapeError::Ragged { .. }))
    ));
}

#[test]
fn test_matmul_dimension_error() {
    let a = create_test_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let b = create_test_matrix(vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]]);
    assert!(matches!(
        a.checked_mul(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_scalar_division() {
    let a = Matrix::new(vec![vec![2.0f64, 4.0], vec![6.0, 8.0]]).unwrap();
    assert_eq!(
        (&a / 2.0f64).unwrap(),
        Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    );
    assert_eq!((&a / 0.0f64).err(), Some(MatrixError::DivisionByZero));
}

#[test]
fn test_determinant_examples() {
    assert_eq!(create_test_matrix(vec![vec![1, 0], vec![0, 1]]).determinant(), Ok(1));
    assert_eq!(create_test_matrix(vec![vec![1, 2], vec![3, 4]]).determinant(), Ok(-2));
    assert_eq!(
        create_test_matrix(vec![vec![0, 0, 0], vec![1, 2, 3], vec![4, 5, 6]]).determinant(),
        Ok(0)
    );
}

#[test]
fn test_chained_expression() -> Result<(), MatrixError> {
    // (A + 1) * B^T - 2I
    let a = create_test_matrix(vec![vec![0, 1], vec![2, 3]]);
    let b = create_test_matrix(vec![vec![1, 0], vec![1, 1]]);
    let eye = densemat_core::matrix::identity::<i64>(2)?;
    let shifted = &a + 1i64;
    let product = (&shifted * &b.transpose())?;
    let result = (&product - &(&eye * 2i64))?;
    assert_eq!(result, create_test_matrix(vec![vec![-1, 3], vec![3, 5]]));
    Ok(())
}

#[test]
fn test_copy_and_rendering() {
    let a = create_test_matrix(vec![vec![1, -2], vec![3, 4]]);
    let mut b = a.copy();
    b.set(1, 1, 0).unwrap();
    assert_eq!(a.get(1, 1).unwrap(), 4);
    assert_eq!(format!("{:?}", a), "Matrix([[1, -2], [3, 4]])");
    assert_eq!(a.to_string(), "1\t-2\n3\t4");
    assert_eq!(b.to_string(), "1\t-2\n3\t0");
}
