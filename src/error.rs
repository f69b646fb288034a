//! Error type shared by the matrix routines and the loss functions.

use thiserror::Error;

/// Everything that can go wrong while computing a loss or handling a config.
#[derive(Error, Debug)]
pub enum SvmError {
    /// Two operands (or an operand and a label vector) disagree on shape.
    #[error("Dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A label does not name one of the weight matrix's classes.
    #[error("Label {label} at index {index} is out of range for {num_classes} classes")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        num_classes: usize,
    },

    /// The batch has no examples, so the mean loss is undefined.
    #[error("Empty batch: at least one example is required")]
    EmptyBatch,

    /// Regularization strength must be finite and non-negative.
    #[error("Invalid regularization strength {0}")]
    InvalidRegularization(f64),

    /// Row data handed to `Matrix::from_data` was not rectangular.
    #[error("Ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SvmError>;

impl SvmError {
    pub fn dimension_mismatch(op: &'static str, expected: &[usize], got: &[usize]) -> Self {
        SvmError::DimensionMismatch {
            op,
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}
