//! Error types for matrix-mul operations.

use numbers_types::Dataset;
use thiserror::Error;

use crate::Stage;

/// Failure to retrieve one vector from the numbers service.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("numbers service error: {0}")]
    Remote(#[from] numbers_client::Error),

    #[error("service reported failure: {0:?}")]
    Rejected(String),

    #[error("payload carries no vector")]
    MissingValue,

    #[error("vector has {actual} elements, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("numbers client error: {0}")]
    Client(#[from] numbers_client::Error),

    #[error("matrix size must be positive")]
    InvalidSize,

    #[error("failed to initialize datasets: {0}")]
    Init(#[source] numbers_client::Error),

    #[error("dataset {dataset}: row {index} failed ({failed} of {size} rows failed): {source}")]
    Assembly {
        dataset: Dataset,
        index: usize,
        failed: usize,
        size: usize,
        #[source]
        source: RetrievalError,
    },

    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("product overflows at C[{row}][{col}]")]
    ArithmeticOverflow { row: usize, col: usize },

    #[error("multiplication task failed: {0}")]
    Multiplier(#[from] tokio::task::JoinError),

    #[error("failed to submit digest: {0}")]
    Submission(#[source] numbers_client::Error),
}

impl Error {
    /// The pipeline stage this error aborts.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Client(_) | Error::InvalidSize | Error::Init(_) => Stage::Init,
            Error::Assembly { .. } => Stage::Fetching,
            Error::DimensionMismatch(..)
            | Error::ArithmeticOverflow { .. }
            | Error::Multiplier(_) => Stage::Multiplying,
            Error::Submission(_) => Stage::Submitting,
        }
    }
}
