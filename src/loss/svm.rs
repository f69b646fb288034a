use crate::{
    error::{Result, SvmError},
    math::matrix::Matrix,
};

/// Hinge margin Δ. An incorrect class is penalized while its score is
/// within Δ of the correct class's score.
pub const DELTA: f64 = 1.0;

/// Checks that (W, X, y, reg) describe a well-formed batch.
///
/// Both matrices must hold as much data as their `rows`/`cols` claim.
/// Shapes must chain as X (N×D) · W (D×C), `y` must have one label per row
/// of X, each label must name one of W's C columns, and `reg` must be finite
/// and non-negative. N = 0 is rejected because the loss is a mean over rows.
pub fn check_inputs(weights: &Matrix, features: &Matrix, labels: &[usize], reg: f64) -> Result<()> {
    if !reg.is_finite() || reg < 0.0 {
        return Err(SvmError::InvalidRegularization(reg));
    }
    weights.check_consistent()?;
    features.check_consistent()?;
    if features.cols != weights.rows {
        return Err(SvmError::dimension_mismatch(
            "features · weights",
            &[features.rows, weights.rows],
            &features.shape(),
        ));
    }
    if labels.len() != features.rows {
        return Err(SvmError::dimension_mismatch(
            "labels",
            &[features.rows],
            &[labels.len()],
        ));
    }
    if features.rows == 0 {
        return Err(SvmError::EmptyBatch);
    }
    let num_classes = weights.cols;
    if let Some((index, &label)) = labels.iter().enumerate().find(|(_, &l)| l >= num_classes) {
        return Err(SvmError::LabelOutOfRange { index, label, num_classes });
    }
    Ok(())
}

/// 0.5 · reg · Σ W²
pub fn l2_penalty(weights: &Matrix, reg: f64) -> f64 {
    0.5 * reg * weights.map(|w| w * w).sum()
}

/// Turns the summed data loss and gradient into the final averaged,
/// regularized pair.
pub fn finish(
    data_loss: f64,
    data_grad: Matrix,
    weights: &Matrix,
    num_train: usize,
    reg: f64,
) -> Result<(f64, Matrix)> {
    let n = num_train as f64;
    let loss = data_loss / n + l2_penalty(weights, reg);
    let grad = data_grad.scale(1.0 / n).add(&weights.scale(reg))?;
    Ok((loss, grad))
}
