pub mod loss_fn;
pub mod svm;
pub mod svm_naive;
pub mod svm_vectorized;
pub mod strategy;

pub use loss_fn::LossFunction;
pub use svm_naive::NaiveSvmLoss;
pub use svm_vectorized::VectorizedSvmLoss;
pub use strategy::{svm_loss, SvmStrategy};
