use densemat_core::matrix::identity;
use densemat_core::{Matrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    let a = Matrix::<f64>::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::<f64>::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;

    println!("A =\n{}\n", a);
    println!("B =\n{}\n", b);
    println!("A + B =\n{}\n", (&a + &b)?);
    println!("A - 1 =\n{}\n", &a - 1.0);
    println!("A * B =\n{}\n", (&a * &b)?);
    println!("A / 2 =\n{}\n", (&a / 2.0)?);
    println!("-A =\n{}\n", -&a);
    println!("A^T = {:?}", a.transpose());
    println!("det(A) = {}", a.determinant()?);

    let eye = identity::<f64>(3)?;
    println!("det(I3) = {}", eye.determinant()?);

    match a.checked_div(0.0) {
        Err(e) => println!("A / 0 -> {}", e),
        Ok(m) => println!("unexpected: {:?}", m),
    }
    match a.checked_mul(&eye) {
        Err(e) => println!("A * I3 -> {}", e),
        Ok(m) => println!("unexpected: {:?}", m),
    }
    Ok(())
}
