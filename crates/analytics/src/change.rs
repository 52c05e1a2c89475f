use crate::error::AnalyticsError;
use core_types::TimeSeries;
use core_types::series::observed;

/// Percentage change over `window` rows: `price[t] / price[t - window] - 1`.
///
/// The output keeps the full length of the input. The first `window` rows, and
/// any row whose current or lagged price is missing, have no observation.
pub fn pct_change(prices: &TimeSeries, window: usize) -> Result<TimeSeries, AnalyticsError> {
    if window < 1 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "window must be at least 1, got {window}"
        )));
    }

    tracing::debug!(rows = prices.len(), window, "Computing windowed percentage change");

    Ok(prices.map_rows((), |_, values, t| {
        let lagged = t.checked_sub(window).and_then(|lag| values[lag])?;
        let current = values[t]?;
        observed(current / lagged - 1.0)
    }))
}
