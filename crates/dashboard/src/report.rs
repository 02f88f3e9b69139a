//! Dashboard Report Assembly

use sensor_series::{AnalysisOutcome, SensorSeries, SeriesError};
use series_stats::{daily_averages, summarize_series, DailyAverage, QuantitySummaries};
use serde::Serialize;
use threshold_alerts::{Alert, AlertSummary, Threshold, ThresholdEvaluator};
use tracing::{info, warn};

/// Everything the presentation layer renders for one series
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Thresholds the alerts were evaluated against
    pub thresholds: Threshold,
    pub summary: AlertSummary,
    /// Most recent alerts, capped at the preview size
    pub alerts: Vec<Alert>,
    /// Alerts left out of the preview
    pub more_alerts: usize,
    pub statistics: QuantitySummaries,
    pub daily: Vec<DailyAverage>,
    /// Output of the external analysis run, when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisOutcome>,
    /// Daily plot location relative to the uploads root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_path: Option<String>,
}

impl DashboardReport {
    /// Evaluate alerts and statistics for `series`
    pub fn build(
        series: &SensorSeries,
        thresholds: Threshold,
        preview: usize,
    ) -> Result<Self, SeriesError> {
        let evaluator = ThresholdEvaluator::new(thresholds);
        let alerts = evaluator.evaluate(series)?;
        let statistics = summarize_series(series)?;
        let daily = daily_averages(&series.readings()?);

        let summary = AlertSummary::from_alerts(&alerts);
        let (shown, more_alerts) = AlertSummary::most_recent(&alerts, preview);

        info!(
            "Report built: {} observations, {} alerts ({} shown)",
            series.len(),
            summary.total,
            shown.len()
        );

        Ok(Self {
            thresholds: *evaluator.thresholds(),
            alerts: shown.to_vec(),
            summary,
            more_alerts,
            statistics,
            daily,
            analysis: None,
            plot_path: None,
        })
    }

    /// Attach the analysis runner's outcome
    ///
    /// A failed run is kept in the report so the error reaches the user.
    pub fn with_analysis(mut self, outcome: AnalysisOutcome) -> Self {
        if outcome.is_error() {
            warn!(
                "Analysis runner reported an error: {}",
                outcome.error.as_deref().unwrap_or_default()
            );
        }
        self.plot_path = outcome.plot_relative_path();
        self.analysis = Some(outcome);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_THRESHOLDS;

    fn series() -> SensorSeries {
        SensorSeries::new(
            vec![85.0, 50.0, 10.0],
            vec![950.0, 500.0, 50.0],
            vec![
                "2025-05-02T08:00:00Z".to_string(),
                "2025-05-02T12:00:00Z".to_string(),
                "2025-05-03T08:00:00Z".to_string(),
            ],
        )
    }

    #[test]
    fn test_build_report() {
        let report = DashboardReport::build(&series(), DEFAULT_THRESHOLDS, 5).unwrap();
        assert_eq!(report.summary.total, 4);
        assert_eq!(report.alerts.len(), 4);
        assert_eq!(report.more_alerts, 0);
        assert_eq!(report.alerts[0].id, "temp-low-2");
        assert_eq!(report.statistics.temperature.max, 85.0);
        assert_eq!(report.statistics.strain.min, 50.0);
        // two days × two quantities
        assert_eq!(report.daily.len(), 4);
        assert!(report.analysis.is_none());
        assert!(report.plot_path.is_none());
    }

    #[test]
    fn test_preview_limit() {
        let report = DashboardReport::build(&series(), DEFAULT_THRESHOLDS, 1).unwrap();
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.more_alerts, 3);
        assert_eq!(report.summary.total, 4);
    }

    #[test]
    fn test_empty_series_fails() {
        assert_eq!(
            DashboardReport::build(&SensorSeries::default(), DEFAULT_THRESHOLDS, 5).unwrap_err(),
            SeriesError::EmptyInput
        );
    }

    #[test]
    fn test_json_shape() {
        let outcome = AnalysisOutcome {
            files_processed: 2,
            ..Default::default()
        };
        let report = DashboardReport::build(&series(), DEFAULT_THRESHOLDS, 5)
            .unwrap()
            .with_analysis(outcome);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["thresholds"]["temperature"]["max"], 80.0);
        assert_eq!(json["alerts"][0]["type"], "temperature");
        assert_eq!(json["analysis"]["files_processed"], 2);
        assert!(json.get("plot_path").is_none());
    }

    #[test]
    fn test_analysis_plot_path_is_relative() {
        let outcome = AnalysisOutcome::from_json(
            r#"{"alerts":[],"plot_path":"uploads\\171_logs\\daily_plot.png","files_processed":1}"#,
        )
        .unwrap();
        let report = DashboardReport::build(&series(), DEFAULT_THRESHOLDS, 5)
            .unwrap()
            .with_analysis(outcome);
        assert_eq!(report.plot_path.as_deref(), Some("171_logs/daily_plot.png"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["plot_path"], "171_logs/daily_plot.png");
    }

    #[test]
    fn test_failed_analysis_is_kept() {
        let outcome = AnalysisOutcome::from_json(r#"{"error":"No CSV files found"}"#).unwrap();
        let report = DashboardReport::build(&series(), DEFAULT_THRESHOLDS, 5)
            .unwrap()
            .with_analysis(outcome);
        assert!(report.plot_path.is_none());
        let analysis = report.analysis.unwrap();
        assert!(analysis.is_error());
        assert_eq!(analysis.error.as_deref(), Some("No CSV files found"));
        // alerts come from the series, not the runner
        assert_eq!(report.summary.total, 4);
    }
}
