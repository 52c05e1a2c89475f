pub mod error;
pub mod series;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use series::{Column, MetricVector, TimeSeries};
pub use table::{Statistic, SummaryRow, SummaryTable};
