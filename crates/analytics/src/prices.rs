use core_types::{Column, MetricVector, TimeSeries};

/// Rebuilds a cumulative price index from period returns, column by column.
///
/// The accumulator starts at `init_value` and compounds with `1 + r` on every
/// observed row. A missing row emits `None` and leaves the accumulator where it
/// was, so compounding resumes from the last valid level on the next
/// observation.
pub fn returns_to_prices(returns: &TimeSeries, init_value: f64) -> TimeSeries {
    tracing::debug!(
        rows = returns.len(),
        columns = returns.width(),
        init_value,
        "Reconstructing prices from returns"
    );
    returns.map_rows(init_value, |level, values, row| {
        values[row].map(|r| {
            *level *= 1.0 + r;
            *level
        })
    })
}

/// Compounded return over the whole series per column: final price level minus one.
///
/// NaN when the last row is missing or the series is empty.
pub fn total_return(returns: &TimeSeries) -> MetricVector {
    returns_to_prices(returns, 1.0).reduce_columns(|column| final_level(column) - 1.0)
}

/// The last row's price level, NaN if that row has no observation.
pub(crate) fn final_level(prices: &Column) -> f64 {
    prices.values().last().copied().flatten().unwrap_or(f64::NAN)
}
