pub mod error;
pub mod math;
pub mod loss;
pub mod config;
pub mod check;

// Convenience re-exports
pub use error::{Result, SvmError};
pub use math::matrix::Matrix;
pub use loss::loss_fn::LossFunction;
pub use loss::svm_naive::NaiveSvmLoss;
pub use loss::svm_vectorized::VectorizedSvmLoss;
pub use loss::strategy::{svm_loss, SvmStrategy};
pub use config::svm_config::SvmConfig;
