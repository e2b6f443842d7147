//! Validation report types.
//!
//! A [`ValidationReport`] is the complete output of one validation run. It is
//! built once by the validator and only read afterwards.

use crate::{ColumnProfile, ColumnType, Finding, Severity};
use serde::{Deserialize, Serialize};

/// Report of one validation run.
///
/// Contains the ordered findings, the table statistics and the profile of every
/// column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no finding has error severity
    pub is_valid: bool,

    /// Findings in check order
    pub findings: Vec<Finding>,

    /// Table statistics
    pub stats: TableStatistics,

    /// Per-column profiles in column order
    pub columns: Vec<ColumnProfile>,
}

/// Counts describing the validated table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatistics {
    /// Data rows with at least one non-empty field
    pub total_rows: usize,

    /// Header field count
    pub total_columns: usize,

    /// Data rows whose fields are all empty
    pub empty_rows: usize,

    /// Whitespace-only lines discarded by the tokenizer
    pub blank_lines: usize,

    /// Columns classified as numeric
    pub numeric_columns: usize,

    /// Columns classified as categorical
    pub categorical_columns: usize,

    /// Columns classified as mixed
    pub mixed_columns: usize,

    /// Columns with no values
    pub empty_columns: usize,

    /// Labels of columns that produced an error finding
    pub problem_columns: Vec<String>,
}

impl TableStatistics {
    /// Fills the per-type column counts from the given profiles.
    pub fn with_type_counts(mut self, columns: &[ColumnProfile]) -> Self {
        let count = |ty: ColumnType| columns.iter().filter(|c| c.column_type == ty).count();
        self.numeric_columns = count(ColumnType::Numeric);
        self.categorical_columns = count(ColumnType::Categorical);
        self.mixed_columns = count(ColumnType::Mixed);
        self.empty_columns = count(ColumnType::Empty);
        self
    }
}

impl ValidationReport {
    /// Creates a report, deriving `is_valid` from the findings.
    pub fn new(findings: Vec<Finding>, stats: TableStatistics, columns: Vec<ColumnProfile>) -> Self {
        Self {
            is_valid: !findings.iter().any(Finding::is_error),
            findings,
            stats,
            columns,
        }
    }

    /// Findings of the given severity, in order.
    pub fn findings_with(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Error)
    }

    /// Warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Warning)
    }

    /// Suggestion-severity findings.
    pub fn suggestions(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Suggestion)
    }

    /// Returns true if at least one warning was raised.
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Looks up the profile of a column by position.
    pub fn column(&self, index: usize) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FindingCode;

    #[test]
    fn test_validity_follows_errors() {
        let report = ValidationReport::new(
            vec![
                Finding::warning(FindingCode::LowRowCount, "few rows"),
                Finding::suggestion(FindingCode::FewColumns, "few columns"),
            ],
            TableStatistics::default(),
            Vec::new(),
        );
        assert!(report.is_valid);
        assert!(report.has_warnings());
        assert_eq!(report.errors().count(), 0);

        let report = ValidationReport::new(
            vec![Finding::error(FindingCode::NoDataRows, "no rows")],
            TableStatistics::default(),
            Vec::new(),
        );
        assert!(!report.is_valid);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_type_counts() {
        let profile = |index: usize, column_type: ColumnType| ColumnProfile {
            name: format!("c{index}"),
            index,
            column_type,
            confidence: 1.0,
            numeric_ratio: 0.0,
            cardinality: 0,
            sample_size: 0,
            empty_count: 0,
            is_constant: false,
            is_likely_identifier: false,
            constant_value: None,
        };
        let columns = vec![
            profile(0, ColumnType::Numeric),
            profile(1, ColumnType::Numeric),
            profile(2, ColumnType::Categorical),
            profile(3, ColumnType::Empty),
        ];
        let stats = TableStatistics::default().with_type_counts(&columns);
        assert_eq!(stats.numeric_columns, 2);
        assert_eq!(stats.categorical_columns, 1);
        assert_eq!(stats.mixed_columns, 0);
        assert_eq!(stats.empty_columns, 1);
    }
}
