use crate::error::AnalyticsError;
use crate::prices::{final_level, returns_to_prices};
use crate::stats::sample_std;
use core_types::{MetricVector, TimeSeries};

/// Geometric annual return: `final_price ^ (periods_per_year / rows) - 1`.
///
/// `rows` counts every row of the series, observed or not.
pub fn annual_return(
    returns: &TimeSeries,
    periods_per_year: u32,
) -> Result<MetricVector, AnalyticsError> {
    let n_periods = returns.len();
    if n_periods < 2 {
        return Err(AnalyticsError::NotEnoughData {
            required: 2,
            actual: n_periods,
        });
    }

    let exponent = f64::from(periods_per_year) / n_periods as f64;
    let prices = returns_to_prices(returns, 1.0);
    Ok(prices.reduce_columns(|column| final_level(column).powf(exponent) - 1.0))
}

/// Sample standard deviation of the raw returns scaled by `sqrt(periods_per_year)`.
///
/// Missing observations are skipped rather than propagated; a column with
/// fewer than two observations yields NaN.
pub fn annual_stdev(returns: &TimeSeries, periods_per_year: u32) -> MetricVector {
    let scale = f64::from(periods_per_year).sqrt();
    returns.reduce_columns(|column| sample_std(column.observations()) * scale)
}

/// Annual return over annual volatility.
///
/// Zero volatility is not guarded: the result follows IEEE division and may be
/// NaN or infinite.
pub fn annual_sharpe_ratio(
    returns: &TimeSeries,
    periods_per_year: u32,
) -> Result<MetricVector, AnalyticsError> {
    let annual = annual_return(returns, periods_per_year)?;
    let stdev = annual_stdev(returns, periods_per_year);
    Ok(annual.iter().zip(&stdev).map(|(r, s)| r / s).collect())
}
