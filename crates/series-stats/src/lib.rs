//! Series Statistics Engine
//!
//! Provides summary statistics and daily per-sensor aggregation for
//! temperature and strain series.

mod daily;
mod statistics;

pub use daily::{daily_averages, DailyAverage};
pub use statistics::{summarize, summarize_series, QuantitySummaries, SeriesSummary};
