use densemat_core::matrix::zeros;
use densemat_core::utils::testing::matrices_near;
use densemat_core::MatrixError;

mod common;
use common::{random_float_matrix, random_int_matrix, seeded_rng};

const CASES: u64 = 32;

#[test]
fn prop_addition_commutes() -> Result<(), MatrixError> {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let (r, c) = (1 + (seed as usize % 4), 1 + (seed as usize % 3));
        let a = random_int_matrix(&mut rng, r, c);
        let b = random_int_matrix(&mut rng, r, c);
        assert_eq!((&a + &b)?, (&b + &a)?, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn prop_addition_associates() -> Result<(), MatrixError> {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let a = random_int_matrix(&mut rng, 3, 2);
        let b = random_int_matrix(&mut rng, 3, 2);
        let c = random_int_matrix(&mut rng, 3, 2);
        let left = (&(&a + &b)? + &c)?;
        let right = (&a + &(&b + &c)?)?;
        assert_eq!(left, right, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn prop_add_negation_is_zero() -> Result<(), MatrixError> {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let a = random_float_matrix(&mut rng, 2, 5);
        assert_eq!((&a + &(-&a))?, zeros(2, 5)?, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn prop_scale_then_divide_round_trips() -> Result<(), MatrixError> {
    for seed in 1..=CASES {
        let mut rng = seeded_rng(seed);
        let a = random_float_matrix(&mut rng, 3, 3);
        let s = seed as f64 * 0.37;
        let back = (&(&a * s) / s)?;
        assert!(matrices_near(&back, &a, 1e-9), "seed {}", seed);

        let ints = random_int_matrix(&mut rng, 2, 2);
        let k = seed as i64;
        assert_eq!((&(&ints * k) / k)?, ints, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn prop_transpose_involutive() {
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let rows = 1 + (seed as usize % 5);
        let cols = 1 + ((seed as usize / 5) % 5);
        let a = random_int_matrix(&mut rng, rows, cols);
        assert_eq!(a.transpose().transpose(), a, "seed {}", seed);
        assert_eq!(a.transpose().shape(), (cols, rows));
    }
}

#[test]
fn prop_product_transpose_reverses() -> Result<(), MatrixError> {
    // (AB)^T == B^T A^T
    for seed in 0..CASES {
        let mut rng = seeded_rng(seed);
        let a = random_int_matrix(&mut rng, 2, 3);
        let b = random_int_matrix(&mut rng, 3, 4);
        let lhs = (&a * &b)?.transpose();
        let rhs = (&b.transpose() * &a.transpose())?;
        assert_eq!(lhs, rhs, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn prop_determinant_multiplicative() -> Result<(), MatrixError> {
    for seed in 0..8 {
        let mut rng = seeded_rng(seed);
        let a = random_int_matrix(&mut rng, 3, 3);
        let b = random_int_matrix(&mut rng, 3, 3);
        let det_ab = (&a * &b)?.determinant()?;
        assert_eq!(det_ab, a.determinant()? * b.determinant()?, "seed {}", seed);
    }
    Ok(())
}
