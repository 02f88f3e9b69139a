//! Index-Aligned Sensor Series

use crate::column::{Quantity, Reading};
use crate::error::SeriesError;
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parallel temperature, strain, and timestamp series
///
/// Index `i` in every vector refers to the same observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSeries {
    /// Temperature readings (°C)
    pub temperature: Vec<f64>,
    /// Strain readings (µε)
    pub strain: Vec<f64>,
    /// ISO-8601 observation timestamps
    pub timestamps: Vec<String>,
}

/// One observation of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint<'a> {
    pub index: usize,
    pub timestamp: &'a str,
    pub temperature: f64,
    pub strain: f64,
}

impl SensorSeries {
    /// Create a series from its three parallel vectors
    pub fn new(temperature: Vec<f64>, strain: Vec<f64>, timestamps: Vec<String>) -> Self {
        Self {
            temperature,
            strain,
            timestamps,
        }
    }

    /// Check that all three series have the same length and return it
    pub fn validate(&self) -> Result<usize, SeriesError> {
        let len = self.timestamps.len();
        if self.temperature.len() != len || self.strain.len() != len {
            return Err(SeriesError::InvalidInput {
                temperature: self.temperature.len(),
                strain: self.strain.len(),
                timestamps: len,
            });
        }
        Ok(len)
    }

    /// Number of observations (timestamp count)
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether there are no observations
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Values recorded for one quantity
    pub fn values(&self, quantity: Quantity) -> &[f64] {
        match quantity {
            Quantity::Temperature => &self.temperature,
            Quantity::Strain => &self.strain,
        }
    }

    /// Iterate over aligned observations
    pub fn points(&self) -> Result<impl Iterator<Item = SeriesPoint<'_>>, SeriesError> {
        self.validate()?;
        Ok(self
            .timestamps
            .iter()
            .zip(self.temperature.iter().zip(self.strain.iter()))
            .enumerate()
            .map(|(index, (timestamp, (&temperature, &strain)))| SeriesPoint {
                index,
                timestamp: timestamp.as_str(),
                temperature,
                strain,
            }))
    }

    /// Parse the timestamp at `index`
    pub fn instant(&self, index: usize) -> Result<DateTime<Utc>, SeriesError> {
        let raw = self.timestamps.get(index).map(String::as_str).unwrap_or_default();
        parse_timestamp(raw).map_err(|e| {
            debug!("Rejected timestamp {:?} at index {}: {}", raw, index, e);
            SeriesError::Parse {
                index,
                value: raw.to_string(),
            }
        })
    }

    /// Parse every timestamp, in index order
    pub fn instants(&self) -> Result<Vec<DateTime<Utc>>, SeriesError> {
        (0..self.timestamps.len()).map(|i| self.instant(i)).collect()
    }

    /// Flatten into per-channel readings named after their quantity
    ///
    /// Every timestamp is parsed, so a malformed one fails the whole call.
    pub fn readings(&self) -> Result<Vec<Reading>, SeriesError> {
        let mut readings = Vec::with_capacity(self.len() * Quantity::ALL.len());
        for point in self.points()? {
            let timestamp = self.instant(point.index)?;
            readings.push(Reading {
                timestamp,
                sensor: Quantity::Temperature.to_string(),
                kind: Quantity::Temperature,
                value: point.temperature,
            });
            readings.push(Reading {
                timestamp,
                sensor: Quantity::Strain.to_string(),
                kind: Quantity::Strain,
                value: point.strain,
            });
        }
        Ok(readings)
    }
}
