#![allow(dead_code)]

use hinge_svm::Matrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A reproducible random batch: (W, X, y).
pub fn random_problem(
    seed: u64,
    num_train: usize,
    dim: usize,
    num_classes: usize,
    weight_std: f64,
) -> (Matrix, Matrix, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = Matrix::gaussian(dim, num_classes, weight_std, &mut rng);
    let features = Matrix::gaussian(num_train, dim, 1.0, &mut rng);
    let labels = (0..num_train).map(|_| rng.gen_range(0..num_classes)).collect();
    (weights, features, labels)
}

pub fn assert_close(a: f64, b: f64, tol: f64, what: &str) {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    assert!(
        (a - b).abs() <= tol * scale,
        "{what}: {a} vs {b} differ by {}",
        (a - b).abs()
    );
}

pub fn assert_matrix_close(a: &Matrix, b: &Matrix, tol: f64, what: &str) {
    assert_eq!(a.shape(), b.shape(), "{what}: shape");
    for i in 0..a.rows {
        for j in 0..a.cols {
            assert_close(a.get(i, j), b.get(i, j), tol, &format!("{what}[{i}][{j}]"));
        }
    }
}
