//! Daily Per-Sensor Averages

use chrono::NaiveDate;
use sensor_series::{Quantity, Reading};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Mean of one sensor channel over one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub sensor: String,
    pub kind: Quantity,
    pub average: f64,
    /// Number of readings averaged
    pub samples: usize,
}

/// Group readings by (date, sensor) and average each group
///
/// NaN readings are skipped; a group with only NaN readings is dropped.
/// Output is ordered by date, then quantity, then sensor name.
pub fn daily_averages(readings: &[Reading]) -> Vec<DailyAverage> {
    let mut groups: BTreeMap<(NaiveDate, Quantity, &str), (f64, usize)> = BTreeMap::new();
    let mut skipped = 0usize;

    for reading in readings {
        if reading.value.is_nan() {
            skipped += 1;
            continue;
        }
        let key = (
            reading.timestamp.date_naive(),
            reading.kind,
            reading.sensor.as_str(),
        );
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += reading.value;
        entry.1 += 1;
    }

    debug!(
        "Aggregated {} readings into {} daily groups ({} NaN skipped)",
        readings.len(),
        groups.len(),
        skipped
    );

    groups
        .into_iter()
        .map(|((date, kind, sensor), (sum, samples))| DailyAverage {
            date,
            sensor: sensor.to_string(),
            kind,
            average: sum / samples as f64,
            samples,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sensor_series::SensorSeries;

    fn reading(day: u32, hour: u32, sensor: &str, kind: Quantity, value: f64) -> Reading {
        Reading {
            timestamp: Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap(),
            sensor: sensor.to_string(),
            kind,
            value,
        }
    }

    #[test]
    fn test_groups_by_day_and_sensor() {
        let readings = vec![
            reading(2, 9, "Temp1", Quantity::Temperature, 20.0),
            reading(2, 17, "Temp1", Quantity::Temperature, 30.0),
            reading(2, 9, "Temp2", Quantity::Temperature, 40.0),
            reading(3, 9, "Temp1", Quantity::Temperature, 10.0),
            reading(2, 9, "Strain1", Quantity::Strain, 500.0),
        ];

        let daily = daily_averages(&readings);
        assert_eq!(daily.len(), 4);

        let may2 = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert_eq!(daily[0].date, may2);
        assert_eq!(daily[0].sensor, "Temp1");
        assert_eq!(daily[0].average, 25.0);
        assert_eq!(daily[0].samples, 2);
        assert_eq!(daily[1].sensor, "Temp2");
        assert_eq!(daily[2].kind, Quantity::Strain);
        assert_eq!(daily[3].date, NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());
        assert_eq!(daily[3].average, 10.0);
    }

    #[test]
    fn test_nan_readings_skipped() {
        let readings = vec![
            reading(2, 9, "Temp1", Quantity::Temperature, f64::NAN),
            reading(2, 10, "Temp1", Quantity::Temperature, 22.0),
            reading(2, 9, "Strain1", Quantity::Strain, f64::NAN),
        ];
        let daily = daily_averages(&readings);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].average, 22.0);
        assert_eq!(daily[0].samples, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(daily_averages(&[]).is_empty());
    }

    #[test]
    fn test_from_series_readings() {
        let series = SensorSeries::new(
            vec![20.0, 24.0],
            vec![100.0, 200.0],
            vec![
                "2025-05-02T08:00:00Z".to_string(),
                "2025-05-02T20:00:00Z".to_string(),
            ],
        );
        let daily = daily_averages(&series.readings().unwrap());
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].kind, Quantity::Temperature);
        assert_eq!(daily[0].average, 22.0);
        assert_eq!(daily[1].average, 150.0);
    }
}
