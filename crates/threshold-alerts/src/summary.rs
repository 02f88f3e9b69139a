//! Alert Summary

use crate::alert::{Alert, Severity};
use sensor_series::Quantity;
use serde::Serialize;

/// Alert counts broken down by quantity and severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub total: usize,
    pub temperature_high: usize,
    pub temperature_low: usize,
    pub strain_high: usize,
    pub strain_low: usize,
}

impl AlertSummary {
    /// Count alerts
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut summary = Self::default();
        for alert in alerts {
            summary.total += 1;
            match (alert.kind, alert.severity) {
                (Quantity::Temperature, Severity::High) => summary.temperature_high += 1,
                (Quantity::Temperature, Severity::Low) => summary.temperature_low += 1,
                (Quantity::Strain, Severity::High) => summary.strain_high += 1,
                (Quantity::Strain, Severity::Low) => summary.strain_low += 1,
            }
        }
        summary
    }

    /// First `limit` alerts of an already sorted list, plus how many were left out
    pub fn most_recent(alerts: &[Alert], limit: usize) -> (&[Alert], usize) {
        let shown = limit.min(alerts.len());
        (&alerts[..shown], alerts.len() - shown)
    }
}
