//! Properties that hold for every generated return series, not just fixtures.

use analytics::{
    down_capture, downside_deviation, drawdowns, overall_capture, returns_to_prices,
    sortino_ratio, up_capture,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use core_types::{Column, TimeSeries};
use proptest::prelude::*;

fn daily_index(n: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2021, 1, 4, 0, 0, 0).unwrap();
    (0..n).map(|i| start + Duration::days(i as i64)).collect()
}

fn single(name: &str, values: Vec<Option<f64>>) -> TimeSeries {
    TimeSeries::new(daily_index(values.len()), vec![Column::new(name, values)]).unwrap()
}

fn complete_returns() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.5f64..0.5, 1..60)
}

fn gappy_returns() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, -0.5f64..0.5), 1..60)
}

/// Benchmark values that sit exactly on the threshold often enough to empty a regime.
fn benchmark_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        3 => Just(Some(0.0)),
        1 => Just(None::<f64>),
        6 => (-0.1f64..0.1).prop_map(Some),
    ]
}

/// Equality that treats NaN as equal to NaN and keeps infinities exact.
fn same_metric(actual: f64, expected: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || actual == expected
}

proptest! {
    #[test]
    fn prices_are_the_running_product(
        returns in complete_returns(),
        init_value in 0.5f64..200.0,
    ) {
        let series = single("fund", returns.iter().copied().map(Some).collect());
        let prices = returns_to_prices(&series, init_value);

        let mut expected = init_value;
        for (r, price) in returns.iter().zip(prices.column("fund").unwrap().values()) {
            expected *= 1.0 + r;
            prop_assert_eq!(*price, Some(expected));
        }
    }

    #[test]
    fn missing_rows_neither_reset_nor_advance_the_price(returns in gappy_returns()) {
        let series = single("fund", returns.clone());
        let prices = returns_to_prices(&series, 1.0);

        let mut level = 1.0;
        for (r, price) in returns.iter().zip(prices.column("fund").unwrap().values()) {
            match r {
                None => prop_assert_eq!(*price, None),
                Some(r) => {
                    level *= 1.0 + r;
                    prop_assert_eq!(*price, Some(level));
                }
            }
        }
    }

    #[test]
    fn drawdowns_never_exceed_zero_and_vanish_at_peaks(returns in complete_returns()) {
        let series = single("fund", returns.iter().copied().map(Some).collect());
        let curve = drawdowns(&series).unwrap();
        let prices = returns_to_prices(&series, 1.0);

        let mut peak = f64::NEG_INFINITY;
        let rows = curve.column("fund").unwrap().values().iter().zip(prices.column("fund").unwrap().values());
        for (dd, price) in rows {
            let dd = dd.unwrap();
            let price = price.unwrap();
            peak = peak.max(price);
            prop_assert!(dd <= 0.0, "drawdown {} is positive", dd);
            if price == peak {
                prop_assert_eq!(dd, 0.0);
            }
        }
    }

    #[test]
    fn sortino_is_nan_exactly_when_downside_deviation_is_zero(
        returns in gappy_returns(),
        mar in -0.1f64..0.1,
        corrected in any::<bool>(),
    ) {
        let series = single("fund", returns);
        let deviation = downside_deviation(&series, mar, corrected);
        let sortino = sortino_ratio(&series, mar, corrected);

        prop_assert_eq!(deviation[0] == 0.0, sortino[0].is_nan());
        prop_assert!(!deviation[0].is_nan());
    }

    #[test]
    fn overall_capture_is_up_over_down(
        rows in prop::collection::vec((prop::option::weighted(0.9, -0.1f64..0.1), benchmark_value()), 1..40),
        thresh in prop_oneof![Just(0.0), -0.05f64..0.05],
    ) {
        let (asset, bench): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let returns = single("fund", asset);
        let benchmark = single("index", bench);

        let up = up_capture(&returns, &benchmark, thresh).unwrap();
        let down = down_capture(&returns, &benchmark, thresh).unwrap();
        let overall = overall_capture(&returns, &benchmark, thresh).unwrap();

        prop_assert!(same_metric(overall[0], up[0] / down[0]));
    }
}
