use crate::error::AnalyticsError;
use crate::stats::mean;
use core_types::{Column, MetricVector, TimeSeries};

/// Which side of the threshold a benchmark period falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Market {
    Down,
    Up,
}

impl Market {
    fn contains(self, benchmark: f64, thresh: f64) -> bool {
        match self {
            Market::Down => benchmark < thresh,
            Market::Up => benchmark > thresh,
        }
    }
}

/// Average asset return over average benchmark return in periods where the
/// benchmark is strictly below `thresh`.
///
/// Rows with a missing benchmark value belong to neither regime. Both averages
/// skip missing observations, so an asset with gaps is averaged over the rows
/// it does observe. NaN when no row is in the regime, when the asset observes
/// none of them, or when the benchmark average is exactly zero.
pub fn down_capture(
    returns: &TimeSeries,
    benchmark: &TimeSeries,
    thresh: f64,
) -> Result<MetricVector, AnalyticsError> {
    capture(returns, benchmark, thresh, Market::Down)
}

/// Average asset return over average benchmark return in periods where the
/// benchmark is strictly above `thresh`.
///
/// Missing values are handled as in `down_capture`.
pub fn up_capture(
    returns: &TimeSeries,
    benchmark: &TimeSeries,
    thresh: f64,
) -> Result<MetricVector, AnalyticsError> {
    capture(returns, benchmark, thresh, Market::Up)
}

/// Up capture over down capture, elementwise and unguarded.
pub fn overall_capture(
    returns: &TimeSeries,
    benchmark: &TimeSeries,
    thresh: f64,
) -> Result<MetricVector, AnalyticsError> {
    let up = up_capture(returns, benchmark, thresh)?;
    let down = down_capture(returns, benchmark, thresh)?;
    Ok(up.iter().zip(&down).map(|(u, d)| u / d).collect())
}

fn capture(
    returns: &TimeSeries,
    benchmark: &TimeSeries,
    thresh: f64,
    market: Market,
) -> Result<MetricVector, AnalyticsError> {
    let bench = benchmark_column(returns, benchmark)?;

    let rows: Vec<usize> = bench
        .values()
        .iter()
        .enumerate()
        .filter_map(|(row, value)| value.filter(|b| market.contains(*b, thresh)).map(|_| row))
        .collect();

    if rows.is_empty() {
        tracing::debug!(?market, thresh, "No benchmark periods in regime; capture is undefined");
        return Ok(vec![f64::NAN; returns.width()]);
    }

    let bench_mean = mean(observed_at(bench, &rows));
    Ok(returns.reduce_columns(|column| {
        if bench_mean == 0.0 {
            return f64::NAN;
        }
        mean(observed_at(column, &rows)) / bench_mean
    }))
}

fn observed_at<'a>(column: &'a Column, rows: &'a [usize]) -> impl Iterator<Item = f64> + 'a {
    rows.iter().filter_map(|row| column.values().get(*row).copied().flatten())
}

/// Checks index alignment and returns the single benchmark column.
fn benchmark_column<'a>(
    returns: &TimeSeries,
    benchmark: &'a TimeSeries,
) -> Result<&'a Column, AnalyticsError> {
    if !returns.same_index(benchmark) {
        return Err(AnalyticsError::AlignmentMismatch(format!(
            "returns ({} rows) and benchmark ({} rows) do not share a timestamp index",
            returns.len(),
            benchmark.len()
        )));
    }

    match benchmark.columns() {
        [column] => Ok(column),
        columns => Err(AnalyticsError::Validation(format!(
            "benchmark must have exactly one column, found {}",
            columns.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{index, series};
    use approx::assert_relative_eq;

    fn fixture() -> (TimeSeries, TimeSeries) {
        let returns = series(&[
            ("fund", &[0.02, -0.01, 0.03, -0.02, 0.01]),
            ("hedge", &[0.01, 0.0, f64::NAN, -0.01, 0.005]),
        ]);
        let benchmark = series(&[("index", &[0.04, -0.02, 0.02, -0.04, 0.0])]);
        (returns, benchmark)
    }

    #[test]
    fn down_capture_uses_strictly_negative_benchmark_rows() {
        let (returns, benchmark) = fixture();
        let down = down_capture(&returns, &benchmark, 0.0).unwrap();

        // rows 1 and 3; bench mean -0.03
        assert_relative_eq!(down[0], -0.015 / -0.03, epsilon = 1e-12);
        assert_relative_eq!(down[1], -0.005 / -0.03, epsilon = 1e-12);
    }

    #[test]
    fn up_capture_skips_missing_asset_values() {
        let (returns, benchmark) = fixture();
        let up = up_capture(&returns, &benchmark, 0.0).unwrap();

        // rows 0 and 2; bench mean 0.03; the hedge only observes row 0
        assert_relative_eq!(up[0], 0.025 / 0.03, epsilon = 1e-12);
        assert_relative_eq!(up[1], 0.01 / 0.03, epsilon = 1e-12);
    }

    #[test]
    fn overall_is_up_over_down() {
        let (returns, benchmark) = fixture();
        let up = up_capture(&returns, &benchmark, 0.0).unwrap();
        let down = down_capture(&returns, &benchmark, 0.0).unwrap();
        let overall = overall_capture(&returns, &benchmark, 0.0).unwrap();

        for i in 0..overall.len() {
            assert_relative_eq!(overall[i], up[i] / down[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn empty_regime_is_nan_for_every_column() {
        let (returns, _) = fixture();
        let benchmark = series(&[("index", &[0.0, 0.0, 0.0, 0.0, 0.0])]);

        let down = down_capture(&returns, &benchmark, 0.0).unwrap();
        let up = up_capture(&returns, &benchmark, 0.0).unwrap();
        assert!(down.iter().chain(&up).all(|v| v.is_nan()));
        assert!(overall_capture(&returns, &benchmark, 0.0).unwrap().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn one_sided_benchmark_leaves_down_capture_undefined() {
        let (returns, _) = fixture();
        let benchmark = series(&[("index", &[0.0, 0.02, 0.01, 0.0, 0.03])]);

        let down = down_capture(&returns, &benchmark, 0.0).unwrap();
        let up = up_capture(&returns, &benchmark, 0.0).unwrap();
        let overall = overall_capture(&returns, &benchmark, 0.0).unwrap();

        assert!(down.iter().all(|v| v.is_nan()));
        assert!(up.iter().all(|v| v.is_finite()));
        // rows 1, 2 and 4; bench mean 0.02
        assert_relative_eq!(up[0], 0.01 / 0.02, epsilon = 1e-12);
        assert!(overall.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn missing_benchmark_rows_belong_to_neither_regime() {
        let (returns, _) = fixture();
        let benchmark = series(&[("index", &[0.04, f64::NAN, 0.02, -0.04, f64::NAN])]);

        // only row 3 is down; row 1 would otherwise count
        let down = down_capture(&returns, &benchmark, 0.0).unwrap();
        assert_relative_eq!(down[0], -0.02 / -0.04, epsilon = 1e-12);
        assert_relative_eq!(down[1], -0.01 / -0.04, epsilon = 1e-12);

        // rows 0 and 2 are up
        let up = up_capture(&returns, &benchmark, 0.0).unwrap();
        assert_relative_eq!(up[0], 0.025 / 0.03, epsilon = 1e-12);
    }

    #[test]
    fn threshold_shifts_the_regimes() {
        let (returns, benchmark) = fixture();
        // only row 0 (0.04) is above 0.03
        let up = up_capture(&returns, &benchmark, 0.03).unwrap();
        assert_relative_eq!(up[0], 0.02 / 0.04, epsilon = 1e-12);
    }

    #[test]
    fn zero_benchmark_mean_is_nan() {
        let returns = series(&[("fund", &[0.01, 0.02])]);
        let benchmark = series(&[("index", &[-0.01, 0.01])]);
        // both rows are below 0.05 and average to zero
        let down = down_capture(&returns, &benchmark, 0.05).unwrap();
        assert!(down[0].is_nan());
    }

    #[test]
    fn overall_propagates_infinities() {
        let returns = series(&[("fund", &[0.02, 0.0])]);
        let benchmark = series(&[("index", &[0.01, -0.01])]);
        let overall = overall_capture(&returns, &benchmark, 0.0).unwrap();
        // down capture is -0.0, so up / down is -inf
        assert!(overall[0].is_infinite());
    }

    #[test]
    fn misaligned_index_is_rejected() {
        let (returns, _) = fixture();
        let shifted = TimeSeries::new(
            index(6)[1..].to_vec(),
            vec![Column::from_f64("index", vec![0.01; 5])],
        )
        .unwrap();

        assert!(matches!(
            down_capture(&returns, &shifted, 0.0),
            Err(AnalyticsError::AlignmentMismatch(_))
        ));
    }

    #[test]
    fn benchmark_needs_one_column() {
        let (returns, _) = fixture();
        let wide = series(&[("a", &[0.0; 5]), ("b", &[0.0; 5])]);
        assert!(matches!(
            up_capture(&returns, &wide, 0.0),
            Err(AnalyticsError::Validation(_))
        ));
    }
}
