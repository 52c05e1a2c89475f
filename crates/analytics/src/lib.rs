//! # Performance Analytics Engine
//!
//! Portfolio performance metrics computed from periodic return series: price
//! reconstruction, drawdowns, annualised return and volatility, Sharpe and
//! Sortino ratios, benchmark capture ratios, and a per-asset summary table.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate with no I/O. It depends only
//!   on `core-types` (Layer 0).
//! - **Stateless Calculation:** every operation is a pure function of its
//!   inputs. Series are never mutated; transforms return new series and
//!   per-column statistics return a `MetricVector` in input column order.
//! - **Degenerate results are values:** division by zero and empty subsets
//!   surface as NaN or infinity so the other columns still compute. Only
//!   invalid input is an `AnalyticsError`.
//!
//! ## Public API
//!
//! - Free functions per component, re-exported at the crate root.
//! - `PerformanceAnalyzer`: the same operations with configured defaults.
//! - `AnalyticsError`: the errors that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod annualized;
pub mod capture;
pub mod change;
pub mod downside;
pub mod drawdown;
pub mod engine;
pub mod error;
pub mod prices;
pub mod stats;
pub mod summary;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use annualized::{annual_return, annual_sharpe_ratio, annual_stdev};
pub use capture::{down_capture, overall_capture, up_capture};
pub use change::pct_change;
pub use downside::{downside_deviation, sortino_ratio};
pub use drawdown::{drawdowns, max_drawdown};
pub use engine::{AnalyzerParams, PerformanceAnalyzer};
pub use error::AnalyticsError;
pub use prices::{returns_to_prices, total_return};
pub use summary::performance_table;
