use serde::{Deserialize, Serialize};

/// The fixed statistics reported in a `SummaryTable`, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    AnnualReturn,
    AnnualStdev,
    SharpeRatio,
    SortinoRatio,
    MaxDrawdowns,
    DownCapture,
    UpCapture,
    OverallCapture,
}

impl Statistic {
    pub const ALL: [Statistic; 8] = [
        Statistic::AnnualReturn,
        Statistic::AnnualStdev,
        Statistic::SharpeRatio,
        Statistic::SortinoRatio,
        Statistic::MaxDrawdowns,
        Statistic::DownCapture,
        Statistic::UpCapture,
        Statistic::OverallCapture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::AnnualReturn => "Annual Return",
            Statistic::AnnualStdev => "Annual StDev",
            Statistic::SharpeRatio => "Sharpe Ratio",
            Statistic::SortinoRatio => "Sortino Ratio",
            Statistic::MaxDrawdowns => "Max Drawdowns",
            Statistic::DownCapture => "Down Capture",
            Statistic::UpCapture => "Up Capture",
            Statistic::OverallCapture => "Overall Capture",
        }
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One statistic across every asset, in asset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub statistic: Statistic,
    pub values: Vec<f64>,
}

/// Per-asset statistics table: one row per `Statistic`, one column per asset.
///
/// This is a plain data transfer object. Rendering it is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub assets: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub const LABEL_HEADER: &'static str = "Statistic";

    /// Column headers, starting with the label column.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(Self::LABEL_HEADER)
            .chain(self.assets.iter().map(String::as_str))
            .collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.statistic.label()).collect()
    }

    pub fn row(&self, statistic: Statistic) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.statistic == statistic)
    }

    pub fn value(&self, statistic: Statistic, asset: &str) -> Option<f64> {
        let col = self.assets.iter().position(|a| a == asset)?;
        self.row(statistic).and_then(|r| r.values.get(col).copied())
    }
}
