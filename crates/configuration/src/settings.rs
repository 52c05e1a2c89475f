use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Default parameters for the performance calculations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Return periods per year, e.g. 252 for daily or 12 for monthly data.
    pub periods_per_year: u32,
    /// Minimum acceptable return, also the benchmark up/down split.
    pub threshold: f64,
    /// Apply Bessel's correction to the downside deviation.
    pub corrected: bool,
    /// Starting level of reconstructed price series.
    pub init_value: f64,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info", "analytics=debug").
    pub level: String,
    /// Directory for a daily-rolling log file. Logs go to stdout when unset.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            periods_per_year: 252,
            threshold: 0.0,
            corrected: true,
            init_value: 1.0,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "perfstats.log".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.analytics;
        if a.periods_per_year == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.periods_per_year must be greater than zero".to_string(),
            ));
        }
        if !a.threshold.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "analytics.threshold must be finite, got {}",
                a.threshold
            )));
        }
        if !a.init_value.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "analytics.init_value must be finite, got {}",
                a.init_value
            )));
        }
        Ok(())
    }
}
