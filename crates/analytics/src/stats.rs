//! Sample moments over observed values. Missing observations are skipped.

/// Arithmetic mean of the observations, NaN when there are none.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 { f64::NAN } else { sum / count as f64 }
}

/// Sample standard deviation (n - 1 denominator), NaN for fewer than two observations.
pub fn sample_std<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    if values.len() < 2 {
        return f64::NAN;
    }

    let mean = mean(values.iter().copied());
    let sum_sq = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>();

    (sum_sq / (values.len() - 1) as f64).sqrt()
}
