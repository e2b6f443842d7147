//! Validation configuration.

use crate::{IngestError, Result};
use serde::{Deserialize, Serialize};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';
/// Default cap on sampled values per column.
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 20;
/// Default row count under which a low-row-count warning is raised.
pub const DEFAULT_MIN_ROWS_WARNING_THRESHOLD: usize = 50;
/// Default numeric ratio at or above which a column is numeric.
pub const DEFAULT_NUMERIC_RATIO_HIGH: f64 = 0.8;
/// Default numeric ratio below which a column is categorical.
pub const DEFAULT_NUMERIC_RATIO_LOW: f64 = 0.5;

/// Options for one ingestion and validation run.
///
/// Every field has a default, so partial YAML/TOML documents are accepted.
///
/// # Example
///
/// ```rust
/// use tabguard_core::ValidationConfig;
///
/// let config = ValidationConfig::new()
///     .with_delimiter(';')
///     .with_max_sample_size(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Field delimiter
    pub delimiter: char,

    /// Maximum number of non-empty values sampled per column
    pub max_sample_size: usize,

    /// Data rows below this count raise a warning
    pub min_rows_warning_threshold: usize,

    /// Numeric ratio at or above which a column is numeric
    pub numeric_ratio_high: f64,

    /// Numeric ratio below which a column is categorical
    pub numeric_ratio_low: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
            min_rows_warning_threshold: DEFAULT_MIN_ROWS_WARNING_THRESHOLD,
            numeric_ratio_high: DEFAULT_NUMERIC_RATIO_HIGH,
            numeric_ratio_low: DEFAULT_NUMERIC_RATIO_LOW,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the per-column sample cap.
    pub fn with_max_sample_size(mut self, size: usize) -> Self {
        self.max_sample_size = size;
        self
    }

    /// Sets the low-row-count warning threshold.
    pub fn with_min_rows_warning_threshold(mut self, rows: usize) -> Self {
        self.min_rows_warning_threshold = rows;
        self
    }

    /// Sets both numeric ratio thresholds.
    pub fn with_numeric_ratios(mut self, low: f64, high: f64) -> Self {
        self.numeric_ratio_low = low;
        self.numeric_ratio_high = high;
        self
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        delimiter_byte(self.delimiter)?;

        if self.max_sample_size == 0 {
            return Err(IngestError::invalid_config(
                "max_sample_size",
                "must be at least 1",
            ));
        }

        for (field, ratio) in [
            ("numeric_ratio_low", self.numeric_ratio_low),
            ("numeric_ratio_high", self.numeric_ratio_high),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(IngestError::invalid_config(
                    field,
                    format!("{ratio} is outside [0, 1]"),
                ));
            }
        }

        if self.numeric_ratio_low > self.numeric_ratio_high {
            return Err(IngestError::invalid_config(
                "numeric_ratio_low",
                format!(
                    "{} is greater than numeric_ratio_high ({})",
                    self.numeric_ratio_low, self.numeric_ratio_high
                ),
            ));
        }

        Ok(())
    }
}

/// Converts a delimiter to the single byte the tokenizer splits on.
///
/// The delimiter must be ASCII and must not be the quote character or a line
/// terminator.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        return Err(IngestError::invalid_config(
            "delimiter",
            format!("{delimiter:?} is not an ASCII character"),
        ));
    }
    if matches!(delimiter, '"' | '\r' | '\n') {
        return Err(IngestError::invalid_config(
            "delimiter",
            format!("{delimiter:?} cannot be used as a delimiter"),
        ));
    }
    Ok(delimiter as u8)
}
