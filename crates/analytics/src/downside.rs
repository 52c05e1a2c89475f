use crate::stats::mean;
use core_types::{Column, MetricVector, TimeSeries};

/// Root mean squared shortfall below the minimum acceptable return `mar`.
///
/// Only observations strictly below `mar` contribute. The sum of squared
/// shortfalls is divided by `count - 1` when `corrected` is set, else by
/// `count`. A column with no observation below `mar` has zero downside
/// deviation, never NaN.
pub fn downside_deviation(returns: &TimeSeries, mar: f64, corrected: bool) -> MetricVector {
    returns.reduce_columns(|column| column_downside_deviation(column, mar, corrected))
}

fn column_downside_deviation(column: &Column, mar: f64, corrected: bool) -> f64 {
    let (sum_sq, count) = column
        .observations()
        .filter(|r| *r < mar)
        .fold((0.0, 0usize), |(sum_sq, count), r| {
            let shortfall = r - mar;
            (sum_sq + shortfall * shortfall, count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    let denominator = if corrected { count - 1 } else { count };
    (sum_sq / denominator as f64).sqrt()
}

/// Mean return over downside deviation.
///
/// Where the downside deviation is exactly zero the ratio is NaN.
pub fn sortino_ratio(returns: &TimeSeries, mar: f64, corrected: bool) -> MetricVector {
    returns.reduce_columns(|column| {
        let deviation = column_downside_deviation(column, mar, corrected);
        if deviation == 0.0 {
            tracing::debug!(column = column.name(), "No downside deviation; Sortino ratio is undefined");
            return f64::NAN;
        }
        mean(column.observations()) / deviation
    })
}
