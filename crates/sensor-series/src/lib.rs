//! Sensor Series Data Model
//!
//! Provides the index-aligned temperature/strain series consumed by the alert
//! evaluator and the statistics engine, strict timestamp parsing, and the
//! result shape emitted by the external analysis runner.

mod column;
mod error;
mod outcome;
mod series;
mod timestamp;

pub use column::{Quantity, Reading};
pub use error::SeriesError;
pub use outcome::AnalysisOutcome;
pub use series::{SensorSeries, SeriesPoint};
pub use timestamp::{parse_timestamp, TimestampError};
