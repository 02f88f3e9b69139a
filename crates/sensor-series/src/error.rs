//! Series Error Types

use thiserror::Error;

/// Errors raised while evaluating or summarizing sensor series
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// The three aligned series do not have the same length
    #[error(
        "Series length mismatch: temperature={temperature}, strain={strain}, timestamps={timestamps}"
    )]
    InvalidInput {
        temperature: usize,
        strain: usize,
        timestamps: usize,
    },

    /// Statistics requested on a series with no elements
    #[error("Cannot summarize an empty series")]
    EmptyInput,

    /// Timestamp string is not an accepted ISO-8601 form
    #[error("Invalid timestamp at index {index}: {value:?}")]
    Parse { index: usize, value: String },
}
