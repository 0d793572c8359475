//! Errors
//!
//! Custom error types used throughout the `driftwatch` crate.
use thiserror::Error;

/// Errors that can occur while loading datasets or running drift detection.
///
/// Per-feature conditions (absent columns, empty samples) are never reported
/// through this type, they are resolved inside the detector.
#[derive(Debug, Error)]
pub enum DriftError {
    /// The dataset file does not exist.
    #[error("Data file not found: {0}")]
    DatasetNotFound(String),
    /// The dataset or configuration could not be read.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to serialize or write an object.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Columns of an in-memory dataset have different lengths.
    #[error("Column {0} has {1} rows, expected {2}.")]
    RaggedDataset(String, usize, usize),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}

impl DriftError {
    /// Whether the error means an input dataset could not be located or loaded.
    pub fn is_load_error(&self) -> bool {
        matches!(self, DriftError::DatasetNotFound(_) | DriftError::UnableToRead(_))
    }
}
