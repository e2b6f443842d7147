//! Structural validation.
//!
//! Runs a fixed battery of checks over a tokenized table and its column
//! profiles. Checks always run in the same order so the findings of a given
//! input are stable:
//!
//! 1. Row count
//! 2. Column count
//! 3. Header integrity
//! 4. Ragged rows
//! 5. Per-column profile checks
//! 6. Aggregate suggestions
//! 7. Ignored empty rows
//!
//! Steps 4 to 6 only run when the table has at least one data row.

use std::collections::HashSet;
use tabguard_core::{
    ColumnProfile, ColumnType, Finding, FindingCode, RawTable, TableStatistics, ValidationConfig,
    ValidationReport,
};
use tracing::debug;

/// Ragged rows cited by number before the rest are only counted.
pub const MAX_CITED_RAGGED_ROWS: usize = 3;

/// Tables with fewer columns are too narrow for most analyses.
pub const MIN_COLUMNS: usize = 2;

/// Tables with fewer columns get a suggestion to add variables.
pub const RECOMMENDED_COLUMNS: usize = 3;

/// Validates the structure of a tokenized table.
#[derive(Debug, Clone)]
pub struct StructuralValidator {
    min_rows_warning_threshold: usize,
}

impl StructuralValidator {
    /// Creates a validator that warns below `min_rows_warning_threshold` rows.
    pub fn new(min_rows_warning_threshold: usize) -> Self {
        Self {
            min_rows_warning_threshold,
        }
    }

    /// Creates a validator from a configuration.
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.min_rows_warning_threshold)
    }

    /// Runs every check and assembles the report.
    ///
    /// `profiles` must hold one profile per header column, in column order.
    pub fn validate(&self, table: &RawTable, profiles: &[ColumnProfile]) -> ValidationReport {
        let mut findings = Vec::new();
        let data_rows = table.populated_row_count();

        findings.extend(self.check_row_count(data_rows));
        findings.extend(self.check_column_count(table.column_count()));
        findings.extend(self.check_header(table.column_names()));

        let mut problem_columns = Vec::new();
        if data_rows > 0 {
            findings.extend(self.check_ragged_rows(table));

            for profile in profiles {
                let column_findings = self.check_column(profile);
                if column_findings.iter().any(Finding::is_error) {
                    problem_columns.push(profile.label());
                }
                findings.extend(column_findings);
            }

            findings.extend(self.check_type_mix(profiles));
        }

        let empty_rows = table.blank_record_count();
        findings.extend(self.check_ignored_rows(table.blank_lines() + empty_rows));

        let stats = TableStatistics {
            total_rows: data_rows,
            total_columns: table.column_count(),
            empty_rows,
            blank_lines: table.blank_lines(),
            problem_columns,
            ..TableStatistics::default()
        }
        .with_type_counts(profiles);

        debug!(
            findings = findings.len(),
            rows = stats.total_rows,
            columns = stats.total_columns,
            "Structural validation finished"
        );

        ValidationReport::new(findings, stats, profiles.to_vec())
    }

    /// Check 1: there must be data, and enough of it.
    fn check_row_count(&self, data_rows: usize) -> Option<Finding> {
        if data_rows == 0 {
            return Some(Finding::error(
                FindingCode::NoDataRows,
                "No data rows found: the file needs a header row followed by at least one data row",
            ));
        }

        (data_rows < self.min_rows_warning_threshold).then(|| {
            Finding::warning(
                FindingCode::LowRowCount,
                format!(
                    "Small dataset ({} rows, fewer than {}). Consider collecting more data for more reliable analyses",
                    data_rows, self.min_rows_warning_threshold
                ),
            )
        })
    }

    /// Check 2: enough columns for downstream analyses.
    fn check_column_count(&self, columns: usize) -> Option<Finding> {
        if columns < MIN_COLUMNS {
            Some(Finding::warning(
                FindingCode::LowColumnCount,
                format!(
                    "Only {columns} column found; most analyses need at least {MIN_COLUMNS} columns"
                ),
            ))
        } else if columns < RECOMMENDED_COLUMNS {
            Some(Finding::suggestion(
                FindingCode::FewColumns,
                format!(
                    "Only {columns} columns available. Datasets with more variables yield richer insights"
                ),
            ))
        } else {
            None
        }
    }

    /// Check 3: header names present and unique.
    fn check_header(&self, names: &[String]) -> Vec<Finding> {
        let mut findings = Vec::new();

        if names.iter().all(|name| name.is_empty()) {
            findings.push(Finding::error(
                FindingCode::EmptyHeader,
                "Header row has no column names",
            ));
            return findings;
        }

        let mut seen = HashSet::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for name in names.iter().filter(|name| !name.is_empty()) {
            if !seen.insert(name.as_str()) && !duplicates.contains(&name.as_str()) {
                duplicates.push(name);
            }
        }
        if !duplicates.is_empty() {
            findings.push(Finding::warning(
                FindingCode::DuplicateHeader,
                format!("Duplicate column names found: {}", duplicates.join(", ")),
            ));
        }

        let unnamed = names.iter().filter(|name| name.is_empty()).count();
        if unnamed > 0 {
            findings.push(Finding::warning(
                FindingCode::EmptyHeaderCells,
                format!("{unnamed} column(s) without a name in the header"),
            ));
        }

        findings
    }

    /// Check 4: every data row has as many fields as the header.
    fn check_ragged_rows(&self, table: &RawTable) -> Option<Finding> {
        let expected = table.column_count();
        let ragged: Vec<(usize, usize)> = table
            .populated_rows()
            .filter(|row| row.len() != expected)
            .map(|row| (row.number, row.len()))
            .collect();

        if ragged.is_empty() {
            return None;
        }

        let cited: Vec<String> = ragged
            .iter()
            .take(MAX_CITED_RAGGED_ROWS)
            .map(|(number, len)| format!("row {number}: {len} values, expected {expected}"))
            .collect();
        let mut message = format!(
            "{} row(s) have a field count different from the header ({})",
            ragged.len(),
            cited.join("; ")
        );
        if ragged.len() > MAX_CITED_RAGGED_ROWS {
            message.push_str(&format!(
                " and {} more rows with similar problems",
                ragged.len() - MAX_CITED_RAGGED_ROWS
            ));
        }

        let rows = ragged
            .iter()
            .take(MAX_CITED_RAGGED_ROWS)
            .map(|(number, _)| *number)
            .collect();
        Some(Finding::warning(FindingCode::RaggedRows, message).with_rows(rows))
    }

    /// Check 5: per-column type and cardinality.
    fn check_column(&self, profile: &ColumnProfile) -> Vec<Finding> {
        let label = profile.label();
        let mut findings = Vec::new();

        if profile.column_type == ColumnType::Empty {
            findings.push(
                Finding::error(
                    FindingCode::EmptyColumn,
                    format!("Column \"{label}\" has no values"),
                )
                .with_column(&label),
            );
            return findings;
        }

        if let Some(value) = profile.constant_value.as_deref().filter(|_| profile.is_constant) {
            findings.push(
                Finding::warning(
                    FindingCode::ConstantColumn,
                    format!("Column \"{label}\" has a single distinct value: \"{value}\""),
                )
                .with_column(&label),
            );
        }

        if profile.is_likely_identifier {
            findings.push(
                Finding::warning(
                    FindingCode::LikelyIdentifier,
                    format!(
                        "Column \"{label}\" may be an identifier (all {} sampled values are distinct)",
                        profile.sample_size
                    ),
                )
                .with_column(&label),
            );
        }

        if profile.column_type == ColumnType::Mixed {
            findings.push(
                Finding::warning(
                    FindingCode::MixedTypes,
                    format!(
                        "Column \"{label}\" has mixed types ({:.0}% numeric)",
                        profile.numeric_ratio * 100.0
                    ),
                )
                .with_column(&label),
            );
        }

        findings
    }

    /// Check 6: the table offers both numeric and categorical data.
    fn check_type_mix(&self, profiles: &[ColumnProfile]) -> Vec<Finding> {
        let has = |ty: ColumnType| profiles.iter().any(|p| p.column_type == ty);
        let mut findings = Vec::new();

        if !has(ColumnType::Numeric) {
            findings.push(Finding::suggestion(
                FindingCode::NoNumericColumns,
                "No numeric columns detected. Some analyses may be limited",
            ));
        }
        if !has(ColumnType::Categorical) {
            findings.push(Finding::suggestion(
                FindingCode::NoCategoricalColumns,
                "No categorical columns detected. Association-rule analyses may not apply",
            ));
        }

        findings
    }

    /// Check 7: blank lines and all-empty records that were left out.
    fn check_ignored_rows(&self, ignored: usize) -> Option<Finding> {
        (ignored > 0).then(|| {
            Finding::warning(
                FindingCode::EmptyRowsSkipped,
                format!("{ignored} empty row(s) were ignored"),
            )
        })
    }
}

impl Default for StructuralValidator {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeClassifier, profile_columns};
    use pretty_assertions::assert_eq;
    use tabguard_core::{RawTableBuilder, Severity};

    fn validate(table: &RawTable) -> ValidationReport {
        let profiles = profile_columns(table, &TypeClassifier::default(), 20);
        StructuralValidator::default().validate(table, &profiles)
    }

    fn codes(report: &ValidationReport) -> Vec<FindingCode> {
        report.findings.iter().map(|f| f.code).collect()
    }

    fn wide_table(rows: usize) -> RawTableBuilder {
        let mut builder = RawTableBuilder::new(["region", "year", "value"]);
        for i in 0..rows {
            builder = builder.row([
                if i % 2 == 0 { "north" } else { "south" }.to_string(),
                (2000 + i % 3).to_string(),
                (i % 7).to_string(),
            ]);
        }
        builder
    }

    #[test]
    fn test_clean_table_has_no_findings() {
        let report = validate(&wide_table(60).build());
        assert_eq!(codes(&report), Vec::<FindingCode>::new());
        assert!(report.is_valid);
        assert_eq!(report.stats.total_rows, 60);
        assert_eq!(report.stats.numeric_columns, 2);
        assert_eq!(report.stats.categorical_columns, 1);
    }

    #[test]
    fn test_row_count_threshold() {
        let report = validate(&wide_table(49).build());
        assert_eq!(codes(&report), vec![FindingCode::LowRowCount]);

        let report = validate(&wide_table(50).build());
        assert!(codes(&report).is_empty());
    }

    #[test]
    fn test_no_data_rows_is_error() {
        let table = RawTableBuilder::new(["a", "b", "c"]).blank_lines(2).build();
        let report = validate(&table);
        assert!(!report.is_valid);
        assert_eq!(
            codes(&report),
            vec![FindingCode::NoDataRows, FindingCode::EmptyRowsSkipped]
        );
        assert!(report.stats.problem_columns.is_empty());
    }

    #[test]
    fn test_single_column_warning() {
        let mut builder = RawTableBuilder::new(["label"]);
        for i in 0..60 {
            builder = builder.row([format!("v{}", i % 4)]);
        }
        let report = validate(&builder.build());
        assert_eq!(
            codes(&report),
            vec![FindingCode::LowColumnCount, FindingCode::NoNumericColumns]
        );
    }

    #[test]
    fn test_header_checks() {
        let table = RawTableBuilder::new(["a", "b", "a", "", "b", "a", ""])
            .row(["1", "x", "2", "3", "y", "4", "5"])
            .build();
        let report = validate(&table);
        let header: Vec<&Finding> = report
            .findings
            .iter()
            .filter(|f| {
                matches!(
                    f.code,
                    FindingCode::DuplicateHeader | FindingCode::EmptyHeaderCells
                )
            })
            .collect();
        assert_eq!(header.len(), 2);
        assert_eq!(header[0].message, "Duplicate column names found: a, b");
        assert_eq!(header[1].message, "2 column(s) without a name in the header");
    }

    #[test]
    fn test_fully_empty_header_is_error() {
        let table = RawTableBuilder::new(["", ""]).row(["1", "2"]).build();
        let report = validate(&table);
        assert!(!report.is_valid);
        assert!(codes(&report).contains(&FindingCode::EmptyHeader));
        assert!(!codes(&report).contains(&FindingCode::EmptyHeaderCells));
    }

    #[test]
    fn test_ragged_rows_cite_first_three() {
        let table = wide_table(60)
            .row(["north", "2001"])
            .row(["south", "2002", "1", "extra"])
            .row(["north"])
            .row(["south", "2000", "3", "4", "5"])
            .build();
        let report = validate(&table);
        let ragged = report
            .findings
            .iter()
            .find(|f| f.code == FindingCode::RaggedRows)
            .expect("ragged finding");

        assert_eq!(ragged.severity, Severity::Warning);
        assert_eq!(ragged.rows, vec![62, 63, 64]);
        assert!(ragged.message.starts_with("4 row(s)"));
        assert!(ragged.message.contains("row 62: 2 values, expected 3"));
        assert!(ragged.message.contains("and 1 more rows"));
        assert!(!ragged.message.contains("row 65"));
    }

    #[test]
    fn test_blank_records_are_not_ragged_and_are_counted() {
        let table = wide_table(60).row(["", ""]).build();
        let report = validate(&table);
        assert_eq!(codes(&report), vec![FindingCode::EmptyRowsSkipped]);
        assert_eq!(report.stats.empty_rows, 1);
        assert_eq!(report.stats.total_rows, 60);
    }

    #[test]
    fn test_empty_column_is_error_and_problem() {
        let mut builder = RawTableBuilder::new(["region", "notes", "value"]);
        for i in 0..60 {
            builder = builder.row([format!("r{}", i % 3), String::new(), i.to_string()]);
        }
        let report = validate(&builder.build());
        assert!(!report.is_valid);
        assert_eq!(report.stats.problem_columns, vec!["notes".to_string()]);
        let empty = report.errors().next().unwrap();
        assert_eq!(empty.code, FindingCode::EmptyColumn);
        assert_eq!(empty.column.as_deref(), Some("notes"));
    }

    #[test]
    fn test_constant_and_mixed_columns() {
        let mut builder = RawTableBuilder::new(["state", "code", "region"]);
        for i in 0..60 {
            let code = if i % 4 == 0 { "n/a".to_string() } else { i.to_string() };
            builder = builder.row(["SC".to_string(), code, format!("r{}", i % 3)]);
        }
        let report = validate(&builder.build());
        let warnings: Vec<(FindingCode, Option<&str>)> = report
            .warnings()
            .map(|f| (f.code, f.column.as_deref()))
            .collect();
        assert_eq!(
            warnings,
            vec![
                (FindingCode::ConstantColumn, Some("state")),
                (FindingCode::MixedTypes, Some("code")),
            ]
        );
        let mixed = report.findings_with(Severity::Warning).nth(1).unwrap();
        assert_eq!(mixed.message, "Column \"code\" has mixed types (75% numeric)");
        assert!(report.is_valid);
    }

    #[test]
    fn test_aggregate_suggestions() {
        let mut builder = RawTableBuilder::new(["x", "y", "z"]);
        for i in 0..60 {
            builder = builder.row([(i % 5).to_string(), (i % 3).to_string(), (i % 2).to_string()]);
        }
        let report = validate(&builder.build());
        assert_eq!(codes(&report), vec![FindingCode::NoCategoricalColumns]);
        assert_eq!(report.suggestions().count(), 1);
    }

    #[test]
    fn test_finding_order_is_fixed() {
        let table = RawTableBuilder::new(["a", "a"])
            .row(["1", "2", "3"])
            .row(["", ""])
            .build();
        let report = validate(&table);
        assert_eq!(
            codes(&report),
            vec![
                FindingCode::LowRowCount,
                FindingCode::FewColumns,
                FindingCode::DuplicateHeader,
                FindingCode::RaggedRows,
                FindingCode::NoCategoricalColumns,
                FindingCode::EmptyRowsSkipped,
            ]
        );
    }
}
