//! Session Threshold Store

use crate::error::ThresholdError;
use crate::threshold::Threshold;
use std::sync::RwLock;
use tracing::{info, warn};

/// Holds the active thresholds for one dashboard session
///
/// Updates replace the whole [`Threshold`]; there is no per-field patch.
pub struct ThresholdStore {
    /// Value injected at construction, restored by [`ThresholdStore::reset`]
    initial: Threshold,
    /// Currently applied thresholds
    current: RwLock<Threshold>,
}

impl ThresholdStore {
    /// Create a store seeded with `initial`
    pub fn new(initial: Threshold) -> Self {
        info!("Creating threshold store with {:?}", initial);
        Self {
            initial,
            current: RwLock::new(initial),
        }
    }

    /// Snapshot of the active thresholds
    pub fn current(&self) -> Result<Threshold, ThresholdError> {
        let guard = self
            .current
            .read()
            .map_err(|e| ThresholdError::LockPoisoned(e.to_string()))?;
        Ok(*guard)
    }

    /// Replace the active thresholds, returning the previous value
    pub fn replace(&self, thresholds: Threshold) -> Result<Threshold, ThresholdError> {
        if thresholds.temperature.is_inverted() || thresholds.strain.is_inverted() {
            warn!("Applying inverted threshold range: {:?}", thresholds);
        }

        let mut guard = self
            .current
            .write()
            .map_err(|e| ThresholdError::LockPoisoned(e.to_string()))?;
        let previous = std::mem::replace(&mut *guard, thresholds);

        info!("Thresholds updated: {:?}", thresholds);
        Ok(previous)
    }

    /// Restore the thresholds the store was created with
    pub fn reset(&self) -> Result<Threshold, ThresholdError> {
        self.replace(self.initial)
    }
}
