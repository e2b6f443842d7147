//! Validation findings.
//!
//! A [`Finding`] is one issue detected in a table. Its [`FindingCode`] is stable
//! and meant for machines; the message is meant for people.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks downstream processing
    Error,
    /// Processing may continue with caution
    Warning,
    /// Quality advice
    Suggestion,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        };
        f.write_str(name)
    }
}

/// Machine-stable identifier of a finding.
///
/// Serialized in `SCREAMING_SNAKE_CASE`. Codes not known to this version
/// deserialize to [`FindingCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    NoDataRows,
    LowRowCount,
    LowColumnCount,
    FewColumns,
    EmptyHeader,
    DuplicateHeader,
    EmptyHeaderCells,
    RaggedRows,
    EmptyColumn,
    ConstantColumn,
    LikelyIdentifier,
    MixedTypes,
    NoNumericColumns,
    NoCategoricalColumns,
    EmptyRowsSkipped,
    #[serde(other)]
    Unknown,
}

impl FindingCode {
    /// The serialized form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::NoDataRows => "NO_DATA_ROWS",
            FindingCode::LowRowCount => "LOW_ROW_COUNT",
            FindingCode::LowColumnCount => "LOW_COLUMN_COUNT",
            FindingCode::FewColumns => "FEW_COLUMNS",
            FindingCode::EmptyHeader => "EMPTY_HEADER",
            FindingCode::DuplicateHeader => "DUPLICATE_HEADER",
            FindingCode::EmptyHeaderCells => "EMPTY_HEADER_CELLS",
            FindingCode::RaggedRows => "RAGGED_ROWS",
            FindingCode::EmptyColumn => "EMPTY_COLUMN",
            FindingCode::ConstantColumn => "CONSTANT_COLUMN",
            FindingCode::LikelyIdentifier => "LIKELY_IDENTIFIER",
            FindingCode::MixedTypes => "MIXED_TYPES",
            FindingCode::NoNumericColumns => "NO_NUMERIC_COLUMNS",
            FindingCode::NoCategoricalColumns => "NO_CATEGORICAL_COLUMNS",
            FindingCode::EmptyRowsSkipped => "EMPTY_ROWS_SKIPPED",
            FindingCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity of the issue
    pub severity: Severity,
    /// Stable code
    pub code: FindingCode,
    /// Human-readable description with the offending identifiers filled in
    pub message: String,
    /// Column the finding is about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Row numbers the finding cites, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<usize>,
}

impl Finding {
    /// Creates a new finding.
    pub fn new(severity: Severity, code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            column: None,
            rows: Vec::new(),
        }
    }

    /// Creates an error-severity finding.
    pub fn error(code: FindingCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a warning-severity finding.
    pub fn warning(code: FindingCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Creates a suggestion-severity finding.
    pub fn suggestion(code: FindingCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, code, message)
    }

    /// Attaches the column this finding is about.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Attaches the row numbers this finding cites.
    pub fn with_rows(mut self, rows: Vec<usize>) -> Self {
        self.rows = rows;
        self
    }

    /// Returns true for error-severity findings.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
