use crate::{error::Result, math::matrix::Matrix};

/// A loss over a linear classifier `scores = X · W` that also yields its
/// gradient with respect to `W`.
///
/// - `weights`  — W, shape (D, C)
/// - `features` — X, shape (N, D), one example per row
/// - `labels`   — y, length N, each in `0..C`
/// - `reg`      — L2 regularization strength, finite and `>= 0`
///
/// Returns `(loss, dW)` where `dW` has the same shape as `weights`.
/// Implementations are stateless, so one value can be shared across threads.
pub trait LossFunction: Send + Sync {
    fn loss_and_gradient(
        &self,
        weights: &Matrix,
        features: &Matrix,
        labels: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix)>;

    fn name(&self) -> &'static str;

    /// Loss only. The default discards the gradient.
    fn loss(&self, weights: &Matrix, features: &Matrix, labels: &[usize], reg: f64) -> Result<f64> {
        self.loss_and_gradient(weights, features, labels, reg)
            .map(|(loss, _)| loss)
    }
}
