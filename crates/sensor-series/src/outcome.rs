//! Analysis Runner Result Model
//!
//! The external analysis step prints a single JSON document on stdout. On
//! success it carries the alert lines, the rendered plot path and the number
//! of CSV files processed; on failure an `error` string with empty alerts.

use serde::{Deserialize, Serialize};

/// Structured output of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Pre-rendered alert lines
    #[serde(default)]
    pub alerts: Vec<String>,
    /// Location of the rendered daily plot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_path: Option<String>,
    /// Number of CSV files the runner found
    #[serde(default)]
    pub files_processed: usize,
    /// Failure reason reported by the runner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisOutcome {
    /// Parse the runner's stdout
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw.trim())
    }

    /// Whether the runner reported a failure
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Plot path with backslashes normalised and the `uploads/` prefix
    /// stripped, as served under the static plots route
    pub fn plot_relative_path(&self) -> Option<String> {
        let normalized = self.plot_path.as_deref()?.replace('\\', "/");
        normalized
            .split_once("uploads/")
            .map(|(_, rest)| rest.to_string())
            .filter(|rest| !rest.is_empty())
    }
}
