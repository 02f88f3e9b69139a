//! Alert Records

use sensor_series::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bound an observation crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Above the range maximum
    High,
    /// Below the range minimum
    Low,
}

impl Severity {
    fn direction(self) -> &'static str {
        match self {
            Severity::High => "above",
            Severity::Low => "below",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => f.write_str("high"),
            Severity::Low => f.write_str("low"),
        }
    }
}

/// A single out-of-range observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// `{temp|strain}-{severity}-{index}`, unique within one evaluation
    pub id: String,
    /// Observation timestamp as supplied
    pub timestamp: String,
    /// Quantity that went out of range
    #[serde(rename = "type")]
    pub kind: Quantity,
    pub severity: Severity,
    /// Observed value
    pub value: f64,
    /// Bound that was crossed
    pub threshold: f64,
    /// Human-readable description
    pub message: String,
}

impl Alert {
    /// Build the alert for observation `index`
    pub fn new(
        kind: Quantity,
        severity: Severity,
        index: usize,
        timestamp: &str,
        value: f64,
        threshold: f64,
    ) -> Self {
        Self {
            id: format!("{}-{}-{}", id_prefix(kind), severity, index),
            timestamp: timestamp.to_string(),
            kind,
            severity,
            value,
            threshold,
            message: format!(
                "{} {} threshold: {}",
                kind.label(),
                severity.direction(),
                kind.format_value(value)
            ),
        }
    }
}

fn id_prefix(kind: Quantity) -> &'static str {
    match kind {
        Quantity::Temperature => "temp",
        Quantity::Strain => "strain",
    }
}
