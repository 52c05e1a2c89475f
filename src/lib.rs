//! # perfstats
//!
//! Portfolio performance analytics over periodic return series.
//!
//! This facade re-exports the workspace crates:
//!
//! - `core_types`: the `TimeSeries` input and `SummaryTable` output types.
//! - `analytics`: the calculations and the `PerformanceAnalyzer`.
//! - `configuration`: typed settings and logging setup.
//!
//! Loading data and rendering tables are left to the caller.

pub use analytics::{
    AnalyticsError, AnalyzerParams, PerformanceAnalyzer, annual_return, annual_sharpe_ratio,
    annual_stdev, down_capture, downside_deviation, drawdowns, max_drawdown, overall_capture,
    pct_change, performance_table, returns_to_prices, sortino_ratio, total_return, up_capture,
};
pub use configuration::{
    AnalyticsSettings, LoggingSettings, Settings, error::ConfigError, init_logging, load_config,
    load_config_from,
};
pub use core_types::{Column, CoreError, MetricVector, Statistic, SummaryRow, SummaryTable, TimeSeries};

/// Builds an analyzer whose defaults come from the loaded settings.
pub fn analyzer_from_settings(settings: &AnalyticsSettings) -> PerformanceAnalyzer {
    let params = AnalyzerParams {
        periods_per_year: settings.periods_per_year,
        threshold: settings.threshold,
        corrected: settings.corrected,
        init_value: settings.init_value,
    };
    tracing::debug!(?params, "Creating performance analyzer");
    PerformanceAnalyzer::new(params)
}
