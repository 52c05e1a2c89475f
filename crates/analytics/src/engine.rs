use crate::error::AnalyticsError;
use crate::{annualized, capture, downside, drawdown, prices, summary};
use core_types::{MetricVector, SummaryTable, TimeSeries};
use serde::{Deserialize, Serialize};

/// The default parameters applied by `PerformanceAnalyzer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerParams {
    /// Annualisation factor, e.g. 252 for daily or 12 for monthly returns.
    pub periods_per_year: u32,
    /// Minimum acceptable return for Sortino and the regime split for capture ratios.
    pub threshold: f64,
    /// Bessel's correction in the downside deviation.
    pub corrected: bool,
    /// Starting level for reconstructed prices.
    pub init_value: f64,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            periods_per_year: 252,
            threshold: 0.0,
            corrected: true,
            init_value: 1.0,
        }
    }
}

/// A stateless calculator for deriving performance metrics from return series.
///
/// It only carries defaults; each method delegates to the free function of the
/// same name with those defaults filled in.
#[derive(Debug, Default, Clone)]
pub struct PerformanceAnalyzer {
    params: AnalyzerParams,
}

impl PerformanceAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn prices(&self, returns: &TimeSeries) -> TimeSeries {
        prices::returns_to_prices(returns, self.params.init_value)
    }

    pub fn drawdowns(&self, returns: &TimeSeries) -> Result<TimeSeries, AnalyticsError> {
        drawdown::drawdowns(returns)
    }

    pub fn max_drawdown(&self, returns: &TimeSeries) -> Result<MetricVector, AnalyticsError> {
        drawdown::max_drawdown(returns)
    }

    pub fn annual_return(&self, returns: &TimeSeries) -> Result<MetricVector, AnalyticsError> {
        annualized::annual_return(returns, self.params.periods_per_year)
    }

    pub fn annual_stdev(&self, returns: &TimeSeries) -> MetricVector {
        annualized::annual_stdev(returns, self.params.periods_per_year)
    }

    pub fn annual_sharpe_ratio(&self, returns: &TimeSeries) -> Result<MetricVector, AnalyticsError> {
        annualized::annual_sharpe_ratio(returns, self.params.periods_per_year)
    }

    pub fn downside_deviation(&self, returns: &TimeSeries) -> MetricVector {
        downside::downside_deviation(returns, self.params.threshold, self.params.corrected)
    }

    pub fn sortino_ratio(&self, returns: &TimeSeries) -> MetricVector {
        downside::sortino_ratio(returns, self.params.threshold, self.params.corrected)
    }

    pub fn down_capture(
        &self,
        returns: &TimeSeries,
        benchmark: &TimeSeries,
    ) -> Result<MetricVector, AnalyticsError> {
        capture::down_capture(returns, benchmark, self.params.threshold)
    }

    pub fn up_capture(
        &self,
        returns: &TimeSeries,
        benchmark: &TimeSeries,
    ) -> Result<MetricVector, AnalyticsError> {
        capture::up_capture(returns, benchmark, self.params.threshold)
    }

    pub fn overall_capture(
        &self,
        returns: &TimeSeries,
        benchmark: &TimeSeries,
    ) -> Result<MetricVector, AnalyticsError> {
        capture::overall_capture(returns, benchmark, self.params.threshold)
    }

    /// The main entry point: the full summary table against `benchmark`.
    pub fn performance_table(
        &self,
        returns: &TimeSeries,
        benchmark: &TimeSeries,
    ) -> Result<SummaryTable, AnalyticsError> {
        summary::performance_table(
            returns,
            benchmark,
            self.params.threshold,
            self.params.periods_per_year,
        )
    }
}
