//! Threshold Configuration

use crate::alert::Severity;
use sensor_series::Quantity;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` band considered normal for one quantity
///
/// `min <= max` is a caller precondition and is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    /// Lower bound; values strictly below raise a low alert
    pub min: f64,
    /// Upper bound; values strictly above raise a high alert
    pub max: f64,
}

impl ThresholdRange {
    /// Create a new range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Classify a value against the range
    ///
    /// Returns the violated severity and the bound it crossed, or `None` when
    /// the value lies within the range (bounds included). The upper bound is
    /// checked first, so an inverted range never yields two alerts.
    pub fn check(&self, value: f64) -> Option<(Severity, f64)> {
        if value > self.max {
            Some((Severity::High, self.max))
        } else if value < self.min {
            Some((Severity::Low, self.min))
        } else {
            None
        }
    }

    /// Whether `min > max`
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Alert bounds for every monitored quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub temperature: ThresholdRange,
    pub strain: ThresholdRange,
}

impl Threshold {
    /// Create a new threshold set
    pub const fn new(temperature: ThresholdRange, strain: ThresholdRange) -> Self {
        Self {
            temperature,
            strain,
        }
    }

    /// Range configured for `quantity`
    pub fn range(&self, quantity: Quantity) -> &ThresholdRange {
        match quantity {
            Quantity::Temperature => &self.temperature,
            Quantity::Strain => &self.strain,
        }
    }
}
