use serde::{Serialize, Deserialize};

use crate::{
    error::Result,
    loss::{loss_fn::LossFunction, svm_naive::NaiveSvmLoss, svm_vectorized::VectorizedSvmLoss},
    math::matrix::Matrix,
};

/// Selects how the SVM loss is computed. Both variants return the same
/// result within floating-point tolerance.
///
/// - `Naive`      — explicit loops over examples and classes; the reference.
/// - `Vectorized` — batched matrix products; the one to use in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvmStrategy {
    Naive,
    #[default]
    Vectorized,
}

impl SvmStrategy {
    pub fn loss_function(self) -> &'static dyn LossFunction {
        match self {
            SvmStrategy::Naive => &NaiveSvmLoss,
            SvmStrategy::Vectorized => &VectorizedSvmLoss,
        }
    }
}

/// Multiclass SVM loss and gradient of `weights` (D×C) on the batch
/// `features` (N×D) / `labels` (N), with L2 strength `reg`.
pub fn svm_loss(
    weights: &Matrix,
    features: &Matrix,
    labels: &[usize],
    reg: f64,
    strategy: SvmStrategy,
) -> Result<(f64, Matrix)> {
    strategy.loss_function().loss_and_gradient(weights, features, labels, reg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_names() {
        assert_eq!(SvmStrategy::Naive.loss_function().name(), "naive");
        assert_eq!(SvmStrategy::Vectorized.loss_function().name(), "vectorized");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&SvmStrategy::Naive).unwrap(), "\"naive\"");
        let s: SvmStrategy = serde_json::from_str("\"vectorized\"").unwrap();
        assert_eq!(s, SvmStrategy::Vectorized);
        assert_eq!(SvmStrategy::default(), SvmStrategy::Vectorized);
    }
}
