//! Human-facing diagnostics derived from a [`ValidationReport`].
//!
//! [`compose`] turns findings into titled messages and [`summarize`] turns the
//! statistics into labeled counts with a qualitative [`Band`]. Rendering is left
//! to the caller.

use serde::{Deserialize, Serialize};
use tabguard_core::{FindingCode, Severity, ValidationReport};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Blocks processing
    Error,
    /// Proceed with caution
    Warning,
    /// Quality advice
    Info,
    /// Everything looks fine
    Success,
}

impl From<Severity> for MessageLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => MessageLevel::Error,
            Severity::Warning => MessageLevel::Warning,
            Severity::Suggestion => MessageLevel::Info,
        }
    }
}

/// A titled, severity-tagged message ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Display severity
    pub level: MessageLevel,
    /// Short heading derived from the finding code
    pub title: String,
    /// Full text, naming the offending columns or rows
    pub message: String,
}

/// Qualitative band attached to a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Comfortably within range
    Healthy,
    /// Usable but close to a limit
    Marginal,
    /// Below what analyses need
    Poor,
    /// Informational, no judgement
    Neutral,
}

/// A labeled count for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    /// Human-readable name of the statistic
    pub label: String,
    /// The count
    pub value: usize,
    /// Qualitative rating of the count
    pub band: Band,
}

impl StatRow {
    fn new(label: &str, value: usize, band: Band) -> Self {
        Self {
            label: label.to_string(),
            value,
            band,
        }
    }
}

const GENERIC_TITLE: &str = "Validation issue";
const GENERIC_MESSAGE: &str = "The file has an issue that this version cannot describe";

/// Title shown for a finding code.
pub fn title_for(code: FindingCode) -> &'static str {
    match code {
        FindingCode::NoDataRows => "No data",
        FindingCode::LowRowCount => "Small dataset",
        FindingCode::LowColumnCount => "Too few columns",
        FindingCode::FewColumns => "Few columns",
        FindingCode::EmptyHeader => "Missing header",
        FindingCode::DuplicateHeader => "Duplicate column names",
        FindingCode::EmptyHeaderCells => "Unnamed columns",
        FindingCode::RaggedRows => "Inconsistent rows",
        FindingCode::EmptyColumn => "Empty column",
        FindingCode::ConstantColumn => "Constant column",
        FindingCode::LikelyIdentifier => "Possible identifier",
        FindingCode::MixedTypes => "Mixed types",
        FindingCode::NoNumericColumns => "No numeric columns",
        FindingCode::NoCategoricalColumns => "No categorical columns",
        FindingCode::EmptyRowsSkipped => "Empty rows ignored",
        FindingCode::Unknown => GENERIC_TITLE,
    }
}

/// Maps a report to display messages.
///
/// Errors come first, then warnings, then suggestions, each group keeping the
/// report order. A valid report without warnings gets one success message.
pub fn compose(report: &ValidationReport) -> Vec<DiagnosticMessage> {
    let mut messages: Vec<DiagnosticMessage> =
        [Severity::Error, Severity::Warning, Severity::Suggestion]
            .into_iter()
            .flat_map(|severity| report.findings_with(severity))
            .map(|finding| {
                let message = if finding.code == FindingCode::Unknown && finding.message.is_empty()
                {
                    GENERIC_MESSAGE.to_string()
                } else {
                    finding.message.clone()
                };
                DiagnosticMessage {
                    level: finding.severity.into(),
                    title: title_for(finding.code).to_string(),
                    message,
                }
            })
            .collect();

    if report.is_valid && !report.has_warnings() {
        messages.push(DiagnosticMessage {
            level: MessageLevel::Success,
            title: "Valid file".to_string(),
            message: format!(
                "File processed successfully: {} records and {} columns detected",
                report.stats.total_rows, report.stats.total_columns
            ),
        });
    }

    messages
}

/// Band for the number of data rows: more than 100 is healthy, 50 to 100 is
/// marginal, fewer than 50 is poor.
pub fn row_count_band(rows: usize) -> Band {
    match rows {
        101.. => Band::Healthy,
        50..=100 => Band::Marginal,
        _ => Band::Poor,
    }
}

/// Band for the number of columns: three or more is healthy.
pub fn column_count_band(columns: usize) -> Band {
    if columns >= 3 {
        Band::Healthy
    } else {
        Band::Marginal
    }
}

/// Band for the number of problem columns: any is poor.
pub fn problem_count_band(problems: usize) -> Band {
    if problems == 0 {
        Band::Healthy
    } else {
        Band::Poor
    }
}

/// Labeled counts summarizing a report.
pub fn summarize(report: &ValidationReport) -> Vec<StatRow> {
    let stats = &report.stats;
    let problems = stats.problem_columns.len();
    vec![
        StatRow::new("Total records", stats.total_rows, row_count_band(stats.total_rows)),
        StatRow::new(
            "Total columns",
            stats.total_columns,
            column_count_band(stats.total_columns),
        ),
        StatRow::new("Numeric columns", stats.numeric_columns, Band::Neutral),
        StatRow::new("Categorical columns", stats.categorical_columns, Band::Neutral),
        StatRow::new("Problem columns", problems, problem_count_band(problems)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabguard_core::{Finding, TableStatistics};

    fn report(findings: Vec<Finding>) -> ValidationReport {
        let stats = TableStatistics {
            total_rows: 120,
            total_columns: 4,
            numeric_columns: 3,
            categorical_columns: 1,
            ..TableStatistics::default()
        };
        ValidationReport::new(findings, stats, Vec::new())
    }

    #[test]
    fn test_grouped_by_severity() {
        let report = report(vec![
            Finding::suggestion(FindingCode::FewColumns, "s1"),
            Finding::warning(FindingCode::LowRowCount, "w1"),
            Finding::error(FindingCode::EmptyColumn, "e1"),
            Finding::warning(FindingCode::MixedTypes, "w2"),
        ]);
        let messages = compose(&report);
        let levels: Vec<(MessageLevel, &str)> = messages
            .iter()
            .map(|m| (m.level, m.message.as_str()))
            .collect();
        assert_eq!(
            levels,
            vec![
                (MessageLevel::Error, "e1"),
                (MessageLevel::Warning, "w1"),
                (MessageLevel::Warning, "w2"),
                (MessageLevel::Info, "s1"),
            ]
        );
        assert_eq!(messages[0].title, "Empty column");
    }

    #[test]
    fn test_success_message_only_when_clean() {
        let messages = compose(&report(vec![Finding::suggestion(
            FindingCode::FewColumns,
            "advice",
        )]));
        let last = messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Success);
        assert_eq!(
            last.message,
            "File processed successfully: 120 records and 4 columns detected"
        );

        let messages = compose(&report(vec![Finding::warning(
            FindingCode::LowRowCount,
            "small",
        )]));
        assert!(messages.iter().all(|m| m.level != MessageLevel::Success));
    }

    #[test]
    fn test_unknown_code_fails_closed() {
        let json = r#"{"severity":"error","code":"FROM_THE_FUTURE","message":""}"#;
        let finding: Finding = serde_json::from_str(json).unwrap();
        let messages = compose(&report(vec![finding]));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].title, "Validation issue");
        assert_eq!(messages[0].message, GENERIC_MESSAGE);
        assert_eq!(messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn test_row_bands() {
        assert_eq!(row_count_band(0), Band::Poor);
        assert_eq!(row_count_band(49), Band::Poor);
        assert_eq!(row_count_band(50), Band::Marginal);
        assert_eq!(row_count_band(100), Band::Marginal);
        assert_eq!(row_count_band(101), Band::Healthy);
    }

    #[test]
    fn test_summary_rows() {
        let mut report = report(Vec::new());
        report.stats.problem_columns = vec!["notes".to_string()];
        let rows = summarize(&report);
        assert_eq!(
            rows,
            vec![
                StatRow::new("Total records", 120, Band::Healthy),
                StatRow::new("Total columns", 4, Band::Healthy),
                StatRow::new("Numeric columns", 3, Band::Neutral),
                StatRow::new("Categorical columns", 1, Band::Neutral),
                StatRow::new("Problem columns", 1, Band::Poor),
            ]
        );
        assert_eq!(column_count_band(2), Band::Marginal);
    }
}
