// ⚠️ Error Types - one enum per layer of the loan record console
//
// ValidationError: a field failed its format rule; the field is asked again
// StoreError: the fixed-capacity collection rejected a record
// CollectError: the interactive session could not continue
// ReportError: the report could not be written

use thiserror::Error;

/// A field value that failed its format rule.
///
/// `message` is the exact text shown to the user before the field is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record collection is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

#[derive(Debug, Error)]
pub enum CollectError {
    /// The record count was not a non-negative integer. Not retried.
    #[error("Invalid input. Please enter a valid number.")]
    InvalidCount { input: String },

    #[error("Input closed while waiting for {field}")]
    InputClosed { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
