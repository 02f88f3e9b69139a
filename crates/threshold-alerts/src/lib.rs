//! Threshold Alerting
//!
//! Compares temperature and strain series against user-adjustable min/max
//! bounds and produces severity-tagged alerts, most recent first.

mod alert;
mod error;
mod evaluator;
mod store;
mod summary;
mod threshold;

pub use alert::{Alert, Severity};
pub use error::ThresholdError;
pub use evaluator::{evaluate, ThresholdEvaluator};
pub use store::ThresholdStore;
pub use summary::AlertSummary;
pub use threshold::{Threshold, ThresholdRange};

pub use sensor_series::{Quantity, SensorSeries, SeriesError};
