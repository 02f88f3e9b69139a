//! Dashboard Configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file,
//! then `DASHBOARD__*` environment variables
//! (e.g. `DASHBOARD__THRESHOLDS__TEMPERATURE__MAX=75`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use threshold_alerts::{Threshold, ThresholdRange};
use tracing::debug;

/// Canonical dashboard thresholds: 20–80 °C, 100–900 µε
pub const DEFAULT_THRESHOLDS: Threshold = Threshold::new(
    ThresholdRange::new(20.0, 80.0),
    ThresholdRange::new(100.0, 900.0),
);

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial alert thresholds for a session
    pub thresholds: Threshold,
    /// Number of alerts shown before collapsing into "+N more"
    pub alert_preview: usize,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Max level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS,
            alert_preview: 5,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Per-bound threshold overrides, e.g. from the command line
#[derive(clap::Args, Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdOverrides {
    #[arg(long)]
    pub temperature_min: Option<f64>,

    #[arg(long)]
    pub temperature_max: Option<f64>,

    #[arg(long)]
    pub strain_min: Option<f64>,

    #[arg(long)]
    pub strain_max: Option<f64>,
}

impl ThresholdOverrides {
    /// Merge the given bounds over `base` into a complete threshold set
    ///
    /// Returns `None` when no bound is set, so callers can skip the store
    /// write entirely.
    pub fn apply(&self, base: Threshold) -> Option<Threshold> {
        if self.is_empty() {
            return None;
        }

        Some(Threshold::new(
            ThresholdRange::new(
                self.temperature_min.unwrap_or(base.temperature.min),
                self.temperature_max.unwrap_or(base.temperature.max),
            ),
            ThresholdRange::new(
                self.strain_min.unwrap_or(base.strain.min),
                self.strain_max.unwrap_or(base.strain.max),
            ),
        ))
    }

    fn is_empty(&self) -> bool {
        self.temperature_min.is_none()
            && self.temperature_max.is_none()
            && self.strain_min.is_none()
            && self.strain_max.is_none()
    }
}

/// Load configuration from defaults, `path` and the process environment
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix("DASHBOARD").separator("__")
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<DashboardConfig, ConfigError> {
    let mut builder =
        Config::builder().add_source(Config::try_from(&DashboardConfig::default())?);

    if let Some(path) = path {
        debug!("Loading configuration file {}", path.display());
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    builder.add_source(env).build()?.try_deserialize()
}
