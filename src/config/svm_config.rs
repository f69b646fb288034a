use serde::{Serialize, Deserialize};

use crate::{
    error::{Result, SvmError},
    loss::{loss_fn::LossFunction, strategy::{svm_loss, SvmStrategy}},
    math::matrix::Matrix,
};

/// Settings for an SVM loss evaluation.
///
/// Stored as JSON so a training script can keep the regularization strength
/// and strategy next to its other hyperparameters. Missing fields fall back
/// to `reg = 0.0` and the vectorized strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmConfig {
    /// L2 regularization strength, finite and `>= 0`.
    pub reg: f64,
    pub strategy: SvmStrategy,
}

impl SvmConfig {
    pub fn new(reg: f64, strategy: SvmStrategy) -> Self {
        SvmConfig { reg, strategy }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.reg.is_finite() || self.reg < 0.0 {
            return Err(SvmError::InvalidRegularization(self.reg));
        }
        Ok(())
    }

    pub fn loss_function(&self) -> &'static dyn LossFunction {
        self.strategy.loss_function()
    }

    /// Runs `svm_loss` with this config's `reg` and strategy.
    pub fn evaluate(&self, weights: &Matrix, features: &Matrix, labels: &[usize]) -> Result<(f64, Matrix)> {
        self.validate()?;
        svm_loss(weights, features, labels, self.reg, self.strategy)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config written by `save_json` and validates it.
    pub fn load_json(path: &str) -> Result<SvmConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: SvmConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
