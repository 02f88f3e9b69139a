//! Summary Statistics Computation

use sensor_series::{SensorSeries, SeriesError};
use serde::{Deserialize, Serialize};

/// Average and extrema of a series
///
/// Raw values; rounding and units are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Arithmetic mean
    pub average: f64,
    /// Maximum value
    pub max: f64,
    /// Minimum value
    pub min: f64,
}

/// Summary for each monitored quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantitySummaries {
    pub temperature: SeriesSummary,
    pub strain: SeriesSummary,
}

/// Compute average, max and min of `values`
///
/// NaN propagates into the average but is skipped by the extrema, so a
/// single missing reading still reports the observed range.
pub fn summarize(values: &[f64]) -> Result<SeriesSummary, SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::EmptyInput);
    }

    let n = values.len() as f64;
    let average = values.iter().sum::<f64>() / n;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(SeriesSummary { average, max, min })
}

/// Summarize both quantities of a series
pub fn summarize_series(series: &SensorSeries) -> Result<QuantitySummaries, SeriesError> {
    series.validate()?;
    Ok(QuantitySummaries {
        temperature: summarize(&series.temperature)?,
        strain: summarize(&series.strain)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_value() {
        let summary = summarize(&[5.0]).unwrap();
        assert_eq!(
            summary,
            SeriesSummary {
                average: 5.0,
                max: 5.0,
                min: 5.0,
            }
        );
    }

    #[test]
    fn test_mean_and_extrema() {
        let summary = summarize(&[25.5, 32.1, 28.3, 15.2, 45.7]).unwrap();
        assert!((summary.average - 29.36).abs() < 1e-9);
        assert_eq!(summary.max, 45.7);
        assert_eq!(summary.min, 15.2);
    }

    #[test]
    fn test_negative_values() {
        let summary = summarize(&[-10.0, -2.5, -7.0]).unwrap();
        assert_eq!(summary.max, -2.5);
        assert_eq!(summary.min, -10.0);
    }

    #[test]
    fn test_nan_values() {
        let summary = summarize(&[1.0, f64::NAN, 3.0]).unwrap();
        assert!(summary.average.is_nan());
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);

        let summary = summarize(&[f64::NAN]).unwrap();
        assert!(summary.average.is_nan());
        assert_eq!(summary.min, f64::INFINITY);
        assert_eq!(summary.max, f64::NEG_INFINITY);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(summarize(&[]), Err(SeriesError::EmptyInput));
    }

    #[test]
    fn test_summarize_series() {
        let series = SensorSeries::new(
            vec![20.0, 30.0],
            vec![100.0, 300.0],
            vec![
                "2025-05-02T10:00:00Z".to_string(),
                "2025-05-02T11:00:00Z".to_string(),
            ],
        );
        let summaries = summarize_series(&series).unwrap();
        assert_eq!(summaries.temperature.average, 25.0);
        assert_eq!(summaries.strain.max, 300.0);
    }

    #[test]
    fn test_summarize_series_errors() {
        assert_eq!(
            summarize_series(&SensorSeries::default()),
            Err(SeriesError::EmptyInput)
        );

        let mismatched = SensorSeries::new(vec![1.0], vec![], vec![]);
        assert!(matches!(
            summarize_series(&mismatched),
            Err(SeriesError::InvalidInput { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_average_within_extrema(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let summary = summarize(&values).unwrap();
            prop_assert!(summary.min <= summary.max);
            prop_assert!(summary.average >= summary.min - 1e-6);
            prop_assert!(summary.average <= summary.max + 1e-6);
            prop_assert!(values.contains(&summary.min));
            prop_assert!(values.contains(&summary.max));
        }
    }
}
