//! Finite-difference gradient checking.
//!
//! The analytic gradient of a loss is compared against the centered
//! difference
//!
//!   ∂f/∂w ≈ (f(w + h) − f(w − h)) / 2h
//!
//! evaluated one weight at a time. Hinge losses have kinks where a margin
//! crosses zero, so a handful of sampled entries may disagree when a step of
//! size `h` straddles one; callers should look at the bulk of the errors
//! rather than the worst one.

use log::debug;
use rand::Rng;

use crate::{
    error::{Result, SvmError},
    math::matrix::Matrix,
};

/// Floor on the denominator of `relative_error`.
const REL_ERROR_FLOOR: f64 = 1e-8;

/// One sampled comparison between numerical and analytic gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckSample {
    pub row: usize,
    pub col: usize,
    pub numerical: f64,
    pub analytic: f64,
    pub rel_error: f64,
}

/// |a − b| / max(1e-8, |a| + |b|)
pub fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / (a.abs() + b.abs()).max(REL_ERROR_FLOOR)
}

/// Centered-difference estimate of ∂f/∂W at every entry of `weights`.
pub fn numerical_gradient<F>(mut f: F, weights: &Matrix, h: f64) -> Result<Matrix>
where
    F: FnMut(&Matrix) -> Result<f64>,
{
    weights.check_consistent()?;
    let mut probe = weights.clone();
    let mut grad = Matrix::zeros(weights.rows, weights.cols);
    for i in 0..weights.rows {
        for j in 0..weights.cols {
            grad.data[i][j] = centered_difference(&mut f, &mut probe, i, j, h)?;
        }
    }
    Ok(grad)
}

/// Checks `num_checks` randomly chosen entries of `analytic` against the
/// centered difference of `f` at `weights`.
pub fn grad_check_sparse<F, R>(
    mut f: F,
    weights: &Matrix,
    analytic: &Matrix,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Result<Vec<GradCheckSample>>
where
    F: FnMut(&Matrix) -> Result<f64>,
    R: Rng + ?Sized,
{
    weights.check_consistent()?;
    analytic.check_consistent()?;
    if analytic.shape() != weights.shape() {
        return Err(SvmError::dimension_mismatch("analytic gradient", &weights.shape(), &analytic.shape()));
    }
    if weights.rows == 0 || weights.cols == 0 {
        return Ok(Vec::new());
    }
    let mut probe = weights.clone();
    let mut samples = Vec::with_capacity(num_checks);
    for _ in 0..num_checks {
        let row = rng.gen_range(0..weights.rows);
        let col = rng.gen_range(0..weights.cols);
        let numerical = centered_difference(&mut f, &mut probe, row, col, h)?;
        let analytic = analytic.get(row, col);
        let rel_error = relative_error(numerical, analytic);
        debug!("grad check ({row}, {col}): numerical {numerical:.6e} analytic {analytic:.6e} rel error {rel_error:.3e}");
        samples.push(GradCheckSample { row, col, numerical, analytic, rel_error });
    }
    Ok(samples)
}

/// Perturbs `probe[i][j]` by ±h, restores it, and returns the slope.
fn centered_difference<F>(f: &mut F, probe: &mut Matrix, i: usize, j: usize, h: f64) -> Result<f64>
where
    F: FnMut(&Matrix) -> Result<f64>,
{
    let original = probe.data[i][j];
    probe.data[i][j] = original + h;
    let plus = f(&*probe)?;
    probe.data[i][j] = original - h;
    let minus = f(&*probe)?;
    probe.data[i][j] = original;
    Ok((plus - minus) / (2.0 * h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    // f(W) = Σ W², so ∂f/∂W = 2W.
    fn squared_sum(w: &Matrix) -> Result<f64> {
        Ok(w.data.iter().flatten().map(|x| x * x).sum())
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(1.0, 1.0), 0.0);
        assert!((relative_error(1.0, 3.0) - 0.5).abs() < 1e-12);
        assert_eq!(relative_error(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_numerical_gradient_of_quadratic() {
        let w = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 3.0]]).unwrap();
        let grad = numerical_gradient(squared_sum, &w, 1e-5).unwrap();
        for (g_row, w_row) in grad.data.iter().zip(w.data.iter()) {
            for (g, x) in g_row.iter().zip(w_row.iter()) {
                assert!((g - 2.0 * x).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_inconsistent_inputs_are_errors() {
        let w = Matrix { rows: 2, cols: 1, data: vec![vec![1.0]] };
        assert!(numerical_gradient(squared_sum, &w, 1e-5).is_err());

        let w = Matrix::zeros(2, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let err = grad_check_sparse(squared_sum, &w, &Matrix::zeros(2, 3), 4, 1e-5, &mut rng).unwrap_err();
        assert!(matches!(err, SvmError::DimensionMismatch { op: "analytic gradient", .. }));
    }

    #[test]
    fn test_sparse_check_leaves_weights_untouched() {
        let w = Matrix::from_data(vec![vec![1.0, -2.0, 0.25]]).unwrap();
        let analytic = w.scale(2.0);
        let mut rng = StdRng::seed_from_u64(3);
        let samples = grad_check_sparse(squared_sum, &w, &analytic, 6, 1e-5, &mut rng).unwrap();
        assert_eq!(samples.len(), 6);
        assert!(samples.iter().all(|s| s.rel_error < 1e-7));
        assert_eq!(w.data, vec![vec![1.0, -2.0, 0.25]]);
    }
}
