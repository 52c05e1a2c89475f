use crate::annualized::{annual_return, annual_sharpe_ratio, annual_stdev};
use crate::capture::{down_capture, overall_capture, up_capture};
use crate::downside::sortino_ratio;
use crate::drawdown::max_drawdown;
use crate::error::AnalyticsError;
use core_types::{MetricVector, Statistic, SummaryRow, SummaryTable, TimeSeries};

const PERCENT: f64 = 100.0;

/// Builds the per-asset summary table against a benchmark.
///
/// Every statistic is computed by its standalone function and scaled by 100,
/// capture ratios included. `thresh` is both the Sortino MAR and the capture
/// regime threshold. Any failing statistic aborts the whole table.
#[tracing::instrument(
    name = "performance_table",
    skip(returns, benchmark),
    fields(rows = returns.len(), assets = returns.width())
)]
pub fn performance_table(
    returns: &TimeSeries,
    benchmark: &TimeSeries,
    thresh: f64,
    periods_per_year: u32,
) -> Result<SummaryTable, AnalyticsError> {
    if returns.len() != benchmark.len() {
        return Err(AnalyticsError::AlignmentMismatch(format!(
            "returns have {} rows but the benchmark has {}",
            returns.len(),
            benchmark.len()
        )));
    }

    let metrics: [(Statistic, MetricVector); 8] = [
        (Statistic::AnnualReturn, annual_return(returns, periods_per_year)?),
        (Statistic::AnnualStdev, annual_stdev(returns, periods_per_year)),
        (Statistic::SharpeRatio, annual_sharpe_ratio(returns, periods_per_year)?),
        (Statistic::SortinoRatio, sortino_ratio(returns, thresh, true)),
        (Statistic::MaxDrawdowns, max_drawdown(returns)?),
        (Statistic::DownCapture, down_capture(returns, benchmark, thresh)?),
        (Statistic::UpCapture, up_capture(returns, benchmark, thresh)?),
        (Statistic::OverallCapture, overall_capture(returns, benchmark, thresh)?),
    ];

    let rows = metrics
        .into_iter()
        .map(|(statistic, values)| SummaryRow {
            statistic,
            values: values.into_iter().map(|v| v * PERCENT).collect(),
        })
        .collect();

    tracing::debug!("Summary table assembled");

    Ok(SummaryTable {
        assets: returns.column_names().into_iter().map(str::to_string).collect(),
        rows,
    })
}
