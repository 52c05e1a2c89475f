use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One scalar per input column, aligned positionally with the column order.
///
/// NaN and infinities are legitimate values here: they mark degenerate
/// results such as a zero denominator.
pub type MetricVector = Vec<f64>;

/// A named column of optional observations.
///
/// `None` means "no observation". A `Some` never holds NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColumn")]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(|v| v.and_then(observed)).collect(),
        }
    }

    /// Builds a column from raw floats, treating NaN as a missing observation.
    pub fn from_f64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(observed).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Iterates over the observed values only, in row order.
    pub fn observations(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The row of the first missing observation, if any.
    pub fn first_missing(&self) -> Option<usize> {
        self.values.iter().position(Option::is_none)
    }
}

/// Wire shape of a `Column`; deserialized values go through `Column::new`.
#[derive(Deserialize)]
struct RawColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl From<RawColumn> for Column {
    fn from(raw: RawColumn) -> Self {
        Column::new(raw.name, raw.values)
    }
}

/// Maps a raw float onto the observation convention: NaN becomes `None`.
pub fn observed(value: f64) -> Option<f64> {
    if value.is_nan() { None } else { Some(value) }
}

/// An immutable, time-indexed table of numeric columns.
///
/// Every column has exactly one value per timestamp and column names are
/// unique. Timestamps are only compared for alignment, never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

/// Wire shape of a `TimeSeries`; deserialized series are validated by `TimeSeries::new`.
#[derive(Deserialize)]
struct RawTimeSeries {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = CoreError;

    fn try_from(raw: RawTimeSeries) -> Result<Self, Self::Error> {
        TimeSeries::new(raw.index, raw.columns)
    }
}

impl TimeSeries {
    pub fn new(index: Vec<DateTime<Utc>>, columns: Vec<Column>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.len() != index.len() {
                return Err(CoreError::InvalidInput(
                    format!("column '{}'", column.name),
                    format!(
                        "has {} values but the index has {} timestamps",
                        column.len(),
                        index.len()
                    ),
                ));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(CoreError::InvalidInput(
                    format!("column '{}'", column.name),
                    "column names must be unique".to_string(),
                ));
            }
        }

        Ok(Self { index, columns })
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn same_index(&self, other: &TimeSeries) -> bool {
        self.index == other.index
    }

    /// Builds a new series with this index and these column names, computing
    /// each row of each column with `f(state, values, row)`.
    ///
    /// `state` starts as a fresh clone of `init` for every column, so running
    /// accumulators never leak across columns. Output columns always have one
    /// value per timestamp.
    pub fn map_rows<S, F>(&self, init: S, mut f: F) -> Self
    where
        S: Clone,
        F: FnMut(&mut S, &[Option<f64>], usize) -> Option<f64>,
    {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let mut state = init.clone();
                let values = (0..self.index.len())
                    .map(|row| f(&mut state, column.values(), row))
                    .collect();
                Column::new(column.name.clone(), values)
            })
            .collect();

        Self {
            index: self.index.clone(),
            columns,
        }
    }

    /// Applies a per-column reduction, producing one scalar per column.
    pub fn reduce_columns<F>(&self, f: F) -> MetricVector
    where
        F: FnMut(&Column) -> f64,
    {
        self.columns.iter().map(f).collect()
    }
}
