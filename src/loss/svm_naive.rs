use log::{debug, trace};

use crate::{
    error::Result,
    loss::{loss_fn::LossFunction, svm},
    math::matrix::Matrix,
};

/// Multiclass SVM loss computed one example and one class at a time.
///
/// This is the reference implementation: slow, but each step maps directly
/// onto the definition
///   L_i = Σ_{j ≠ y_i} max(0, s_j − s_{y_i} + Δ)
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSvmLoss;

impl LossFunction for NaiveSvmLoss {
    fn loss_and_gradient(
        &self,
        weights: &Matrix,
        features: &Matrix,
        labels: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix)> {
        svm::check_inputs(weights, features, labels, reg)?;

        let num_classes = weights.cols;
        let num_train = features.rows;
        let mut loss = 0.0;
        let mut grad = Matrix::zeros(weights.rows, weights.cols);

        for (i, &label) in labels.iter().enumerate() {
            let x_i = features.row(i);
            let scores = class_scores(x_i, weights);
            let correct_class_score = scores[label];
            let mut contributors = 0usize;

            for j in 0..num_classes {
                if j == label {
                    continue;
                }
                let margin = scores[j] - correct_class_score + svm::DELTA;
                if margin > 0.0 {
                    loss += margin;
                    for (d, &x) in x_i.iter().enumerate() {
                        grad.data[d][j] += x;
                    }
                    contributors += 1;
                }
            }

            // The correct class is pulled down once per violating class.
            let pull = contributors as f64;
            for (d, &x) in x_i.iter().enumerate() {
                grad.data[d][label] -= pull * x;
            }
            trace!("example {i}: label {label}, {contributors} contributing classes");
        }

        let (loss, grad) = svm::finish(loss, grad, weights, num_train, reg)?;
        debug!(
            "naive svm loss: N={num_train} D={} C={num_classes} reg={reg} loss={loss:.6}",
            weights.rows
        );
        Ok((loss, grad))
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// s = x · W for a single example.
fn class_scores(x: &[f64], weights: &Matrix) -> Vec<f64> {
    let mut scores = vec![0.0; weights.cols];
    for (d, &x_d) in x.iter().enumerate() {
        for (s, &w) in scores.iter_mut().zip(weights.data[d].iter()) {
            *s += x_d * w;
        }
    }
    scores
}
