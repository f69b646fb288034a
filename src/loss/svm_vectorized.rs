use log::debug;

use crate::{
    error::Result,
    loss::{loss_fn::LossFunction, svm},
    math::matrix::Matrix,
};

/// Multiclass SVM loss computed with whole-matrix operations.
///
/// Produces the same `(loss, dW)` as `NaiveSvmLoss` up to floating-point
/// summation order:
///
///   scores = X · W                       (N×C)
///   margin = scores − scores[i, y_i] + Δ (correct class excluded)
///   mask   = [margin > 0], with mask[i, y_i] = −Σ_j mask[i, j]
///   dW     = Xᵀ · mask / N + reg · W
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorizedSvmLoss;

impl LossFunction for VectorizedSvmLoss {
    fn loss_and_gradient(
        &self,
        weights: &Matrix,
        features: &Matrix,
        labels: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix)> {
        svm::check_inputs(weights, features, labels, reg)?;

        let num_train = features.rows;
        let scores = features.matmul(weights)?;
        let margins = margins(&scores, labels);

        let loss = margins.map(|m| m.max(0.0)).sum();
        let mask = gradient_mask(&margins, labels);
        let grad = features.transpose().matmul(&mask)?;

        let (loss, grad) = svm::finish(loss, grad, weights, num_train, reg)?;
        debug!(
            "vectorized svm loss: N={num_train} D={} C={} reg={reg} loss={loss:.6}",
            weights.rows, weights.cols
        );
        Ok((loss, grad))
    }

    fn name(&self) -> &'static str {
        "vectorized"
    }
}

/// margin[i, j] = scores[i, j] − scores[i, y_i] + Δ, with the correct-class
/// entry of each row forced to 0 so it never counts as active.
fn margins(scores: &Matrix, labels: &[usize]) -> Matrix {
    let data = scores.data.iter().zip(labels.iter())
        .map(|(row, &label)| {
            let correct = row[label];
            row.iter().enumerate()
                .map(|(j, &s)| if j == label { 0.0 } else { s - correct + svm::DELTA })
                .collect()
        })
        .collect();
    Matrix { rows: scores.rows, cols: scores.cols, data }
}

/// Coefficients of each example's row in dW: +1 for every active incorrect
/// class, minus the active count at the correct class.
fn gradient_mask(margins: &Matrix, labels: &[usize]) -> Matrix {
    let mut mask = margins.map(|m| if m > 0.0 { 1.0 } else { 0.0 });
    for (row, &label) in mask.data.iter_mut().zip(labels.iter()) {
        let active: f64 = row.iter().sum();
        row[label] -= active;
    }
    mask
}
