//! Column type classification.
//!
//! A column's type is decided by the share of its sampled values that parse as
//! finite decimal numbers:
//!
//! - `ratio >= high` is numeric
//! - `low <= ratio < high` is mixed
//! - `ratio < low` is categorical
//!
//! A column with no sampled values is empty.

use regex::Regex;
use std::sync::LazyLock;
use tabguard_core::{ColumnSample, ColumnType, ValidationConfig};
use tracing::debug;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("number pattern is valid")
});

/// Returns true if `value`, once trimmed, is a finite decimal or scientific
/// number.
///
/// `NaN`, `inf`, `Infinity`, hexadecimal and empty strings are not numbers.
///
/// ```rust
/// use tabguard_validator::is_finite_number;
///
/// assert!(is_finite_number(" -1.5e3 "));
/// assert!(!is_finite_number("NaN"));
/// assert!(!is_finite_number("1e999"));
/// ```
pub fn is_finite_number(value: &str) -> bool {
    let value = value.trim();
    NUMBER_PATTERN.is_match(value) && value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Verdict for one column sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Inferred type
    pub column_type: ColumnType,
    /// Share of sampled values supporting the verdict
    pub confidence: f64,
    /// Share of sampled values that are finite numbers
    pub numeric_ratio: f64,
}

/// Classifies column samples using configurable numeric ratio thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeClassifier {
    numeric_ratio_high: f64,
    numeric_ratio_low: f64,
}

impl TypeClassifier {
    /// Creates a classifier with the given thresholds.
    pub fn new(numeric_ratio_low: f64, numeric_ratio_high: f64) -> Self {
        Self {
            numeric_ratio_high,
            numeric_ratio_low,
        }
    }

    /// Creates a classifier from the thresholds of a configuration.
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.numeric_ratio_low, config.numeric_ratio_high)
    }

    /// Classifies a sample.
    pub fn classify(&self, sample: &ColumnSample) -> Classification {
        if sample.is_empty() {
            return Classification {
                column_type: ColumnType::Empty,
                confidence: 1.0,
                numeric_ratio: 0.0,
            };
        }

        let numeric = sample
            .values
            .iter()
            .filter(|value| is_finite_number(value))
            .count();
        let numeric_ratio = numeric as f64 / sample.len() as f64;

        let (column_type, confidence) = if numeric_ratio >= self.numeric_ratio_high {
            (ColumnType::Numeric, numeric_ratio)
        } else if numeric_ratio >= self.numeric_ratio_low {
            (ColumnType::Mixed, numeric_ratio)
        } else {
            (ColumnType::Categorical, 1.0 - numeric_ratio)
        };

        debug!(
            column = %sample.name,
            %column_type,
            numeric_ratio,
            sampled = sample.len(),
            "Classified column"
        );

        Classification {
            column_type,
            confidence,
            numeric_ratio,
        }
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}
