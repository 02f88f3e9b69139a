//! Threshold Store Error Types

use thiserror::Error;

/// Errors raised by the shared threshold store
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// A writer panicked while holding the store lock
    #[error("Threshold store lock poisoned: {0}")]
    LockPoisoned(String),
}
