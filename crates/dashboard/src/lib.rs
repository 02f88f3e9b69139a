//! Sensor Dashboard Core
//!
//! Composition layer for the sensor dashboard: owns the canonical default
//! thresholds, loads layered configuration, and assembles the alert and
//! statistics report the presentation layer renders.

mod settings;
mod report;
mod session;

pub use settings::{
    load_config, DashboardConfig, LoggingConfig, ThresholdOverrides, DEFAULT_THRESHOLDS,
};
pub use report::DashboardReport;
pub use session::DashboardSession;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
///
/// Logs go to stderr so stdout stays free for the JSON report.
pub fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let level: Level = logging
        .level
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", logging.level, e))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
