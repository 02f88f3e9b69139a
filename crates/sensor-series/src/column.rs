//! Monitored Quantities and Channel Readings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monitored physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Temperature in °C
    Temperature,
    /// Strain in µε
    Strain,
}

impl Quantity {
    /// All quantities, in evaluation order
    pub const ALL: [Quantity; 2] = [Quantity::Temperature, Quantity::Strain];

    /// Display label ("Temperature", "Strain")
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Strain => "Strain",
        }
    }

    /// Measurement unit
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Strain => "µε",
        }
    }

    /// Decimal places used when a value is shown to a user
    pub fn precision(self) -> usize {
        match self {
            Quantity::Temperature => 1,
            Quantity::Strain => 2,
        }
    }

    /// Format a value with this quantity's precision and unit
    ///
    /// Temperature is rendered without a separator (`45.7°C`), strain with
    /// one (`350.00 µε`).
    pub fn format_value(self, value: f64) -> String {
        match self {
            Quantity::Temperature => format!("{:.*}{}", self.precision(), value, self.unit()),
            Quantity::Strain => format!("{:.*} {}", self.precision(), value, self.unit()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Temperature => f.write_str("temperature"),
            Quantity::Strain => f.write_str("strain"),
        }
    }
}

/// A single reading from one named sensor channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Observation instant
    pub timestamp: DateTime<Utc>,
    /// Sensor channel name (CSV column header)
    pub sensor: String,
    /// Quantity measured by the channel
    pub kind: Quantity,
    /// Measured value
    pub value: f64,
}
