use chrono::{DateTime, Duration, TimeZone, Utc};
use core_types::{Column, TimeSeries};

pub fn index(n: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap();
    (0..n).map(|i| start + Duration::days(30 * i as i64)).collect()
}

/// Builds a series on the default index; NaN marks a missing observation.
pub fn series(columns: &[(&str, &[f64])]) -> TimeSeries {
    let rows = columns.first().map_or(0, |(_, v)| v.len());
    TimeSeries::new(
        index(rows),
        columns
            .iter()
            .map(|(name, values)| Column::from_f64(*name, values.to_vec()))
            .collect(),
    )
    .unwrap()
}

/// Flattens a column into raw floats with NaN for missing values.
pub fn raw(series: &TimeSeries, name: &str) -> Vec<f64> {
    series
        .column(name)
        .unwrap()
        .values()
        .iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}
