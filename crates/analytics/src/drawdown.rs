use crate::error::AnalyticsError;
use crate::prices::returns_to_prices;
use core_types::{MetricVector, TimeSeries};

/// Drawdown curve per column: `price / running_max(price) - 1`, always `<= 0`.
///
/// Prices are rebuilt from `returns` starting at 1. Unlike price
/// reconstruction, this requires every observation to be present.
pub fn drawdowns(returns: &TimeSeries) -> Result<TimeSeries, AnalyticsError> {
    ensure_complete(returns)?;

    let prices = returns_to_prices(returns, 1.0);
    Ok(prices.map_rows(f64::NEG_INFINITY, |peak, values, row| {
        values[row].map(|p| {
            if p > *peak {
                *peak = p;
            }
            p / *peak - 1.0
        })
    }))
}

/// Largest peak-to-trough decline per column, as a positive magnitude.
///
/// 0 means no drawdown. A column with no rows yields NaN.
pub fn max_drawdown(returns: &TimeSeries) -> Result<MetricVector, AnalyticsError> {
    let curve = drawdowns(returns)?;
    Ok(curve.reduce_columns(|column| {
        column
            .observations()
            .fold(None, |worst: Option<f64>, dd| Some(worst.map_or(dd, |w| w.min(dd))))
            .map_or(f64::NAN, |worst| -worst)
    }))
}

/// Rejects any series holding a missing observation.
pub(crate) fn ensure_complete(series: &TimeSeries) -> Result<(), AnalyticsError> {
    for column in series.columns() {
        if let Some(row) = column.first_missing() {
            return Err(AnalyticsError::MissingData {
                column: column.name().to_string(),
                row,
            });
        }
    }
    Ok(())
}
