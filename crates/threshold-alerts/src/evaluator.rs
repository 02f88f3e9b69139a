//! Threshold Evaluator Implementation

use crate::alert::Alert;
use crate::threshold::Threshold;
use chrono::{DateTime, Utc};
use sensor_series::{Quantity, SensorSeries, SeriesError};
use tracing::{debug, warn};

/// Evaluate every observation of `series` against `thresholds`
///
/// Each quantity is scanned independently and yields at most one alert per
/// index. The result is ordered by parsed timestamp, most recent first;
/// alerts sharing an instant keep generation order (temperature before
/// strain, ascending index).
///
/// Fails with [`SeriesError::InvalidInput`] when the series lengths differ and
/// with [`SeriesError::Parse`] when any observation carries a timestamp that
/// is not strict ISO-8601, whether or not it raises an alert. No partial list
/// is returned.
pub fn evaluate(series: &SensorSeries, thresholds: &Threshold) -> Result<Vec<Alert>, SeriesError> {
    let len = series.validate()?;
    let instants = series.instants()?;

    let mut keyed: Vec<(DateTime<Utc>, Alert)> = Vec::new();
    for quantity in Quantity::ALL {
        let range = thresholds.range(quantity);
        if range.is_inverted() {
            warn!(
                "Inverted {} range: min {} > max {}",
                quantity, range.min, range.max
            );
        }

        for (index, &value) in series.values(quantity).iter().enumerate() {
            if let Some((severity, bound)) = range.check(value) {
                let alert = Alert::new(
                    quantity,
                    severity,
                    index,
                    &series.timestamps[index],
                    value,
                    bound,
                );
                keyed.push((instants[index], alert));
            }
        }
    }

    // stable: equal instants keep generation order
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    debug!("Evaluated {} observations: {} alerts", len, keyed.len());

    Ok(keyed.into_iter().map(|(_, alert)| alert).collect())
}

/// Evaluator bound to an injected threshold set
#[derive(Debug, Clone)]
pub struct ThresholdEvaluator {
    thresholds: Threshold,
}

impl ThresholdEvaluator {
    /// Create an evaluator for `thresholds`
    pub fn new(thresholds: Threshold) -> Self {
        Self { thresholds }
    }

    /// Active thresholds
    pub fn thresholds(&self) -> &Threshold {
        &self.thresholds
    }

    /// Evaluate a series against the bound thresholds
    pub fn evaluate(&self, series: &SensorSeries) -> Result<Vec<Alert>, SeriesError> {
        evaluate(series, &self.thresholds)
    }
}
