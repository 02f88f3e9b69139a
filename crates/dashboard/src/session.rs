//! Dashboard Session

use crate::report::DashboardReport;
use crate::settings::{DashboardConfig, ThresholdOverrides};
use anyhow::Context;
use sensor_series::SensorSeries;
use threshold_alerts::{Threshold, ThresholdStore};
use tracing::info;

/// Per-session state: the user-adjustable thresholds
pub struct DashboardSession {
    store: ThresholdStore,
    alert_preview: usize,
}

impl DashboardSession {
    /// Create a session seeded from configuration
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            store: ThresholdStore::new(config.thresholds),
            alert_preview: config.alert_preview,
        }
    }

    /// Active thresholds
    pub fn thresholds(&self) -> anyhow::Result<Threshold> {
        Ok(self.store.current()?)
    }

    /// Apply a complete new threshold set
    pub fn update_thresholds(&self, thresholds: Threshold) -> anyhow::Result<()> {
        self.store.replace(thresholds)?;
        Ok(())
    }

    /// Merge per-bound overrides over the active thresholds
    ///
    /// Returns whether anything was replaced.
    pub fn apply_overrides(&self, overrides: &ThresholdOverrides) -> anyhow::Result<bool> {
        match overrides.apply(self.thresholds()?) {
            Some(thresholds) => {
                info!("Applying threshold overrides: {:?}", thresholds);
                self.update_thresholds(thresholds)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discard user changes
    pub fn reset_thresholds(&self) -> anyhow::Result<()> {
        self.store.reset()?;
        Ok(())
    }

    /// Build the report for `series` against the active thresholds
    pub fn report(&self, series: &SensorSeries) -> anyhow::Result<DashboardReport> {
        let thresholds = self.thresholds()?;
        DashboardReport::build(series, thresholds, self.alert_preview)
            .context("Failed to evaluate sensor series")
    }
}
