//! Per-column types: samples, inferred types and profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// At least the high ratio of sampled values are numbers
    Numeric,
    /// Mostly non-numeric values
    Categorical,
    /// Between the low and high numeric ratios
    Mixed,
    /// No non-empty values were found
    Empty,
}

impl ColumnType {
    /// Lowercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Mixed => "mixed",
            ColumnType::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded, ordered sample of the non-empty values of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSample {
    /// Header name (may be empty)
    pub name: String,
    /// 0-based column position
    pub index: usize,
    /// Non-empty values in row order, at most `max_samples` of them
    pub values: Vec<String>,
    /// Empty values seen while sampling
    pub empty_count: usize,
    /// Rows seen while sampling that were too short to reach this column
    pub missing_count: usize,
}

impl ColumnSample {
    /// Creates an empty sample for the given column.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            values: Vec::new(),
            empty_count: 0,
            missing_count: 0,
        }
    }

    /// Number of sampled non-empty values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no non-empty value was sampled.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Inferred type plus structural flags for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Header name (may be empty)
    pub name: String,
    /// 0-based column position
    pub index: usize,
    /// Inferred type
    pub column_type: ColumnType,
    /// Share of sampled values supporting the verdict
    pub confidence: f64,
    /// Share of sampled values that parse as finite numbers
    pub numeric_ratio: f64,
    /// Distinct sampled values
    pub cardinality: usize,
    /// Number of sampled non-empty values
    pub sample_size: usize,
    /// Empty values seen while sampling
    pub empty_count: usize,
    /// A single distinct value over at least two samples
    pub is_constant: bool,
    /// Every sampled value is distinct over a large enough sample
    pub is_likely_identifier: bool,
    /// The repeated value when `is_constant` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_value: Option<String>,
}

impl ColumnProfile {
    /// Name used in messages: the header name, or the 1-based position for
    /// unnamed columns.
    pub fn label(&self) -> String {
        column_label(&self.name, self.index)
    }
}

/// Display label for a column that may be unnamed.
pub fn column_label(name: &str, index: usize) -> String {
    if name.is_empty() {
        format!("#{}", index + 1)
    } else {
        name.to_string()
    }
}
