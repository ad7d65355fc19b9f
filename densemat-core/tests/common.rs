use densemat_core::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper functions shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

#[allow(dead_code)]
pub fn create_test_matrix(data: Vec<Vec<i64>>) -> Matrix<i64> {
    Matrix::new(data).expect("Test matrix creation failed")
}

/// Seeded RNG so failures are reproducible.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random integer matrix with entries in [-50, 50].
#[allow(dead_code)]
pub fn random_int_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-50..=50)).collect())
        .collect();
    create_test_matrix(data)
}

/// Random float matrix with entries in [-10, 10).
#[allow(dead_code)]
pub fn random_float_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    Matrix::new(data).expect("Test matrix creation failed")
}
