pub mod svm_config;

pub use svm_config::SvmConfig;
