//! Tokenized, still-untyped table representation.

use crate::{IngestError, Result};
use serde::{Deserialize, Serialize};

/// A single tokenized record.
///
/// `number` is the 1-based ordinal of the record among non-blank records, so the
/// header is row 1 and the first data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based record number (header is 1)
    pub number: usize,
    /// Trimmed field values in input order
    pub fields: Vec<String>,
}

impl RawRow {
    /// Creates a new row.
    pub fn new(number: usize, fields: Vec<String>) -> Self {
        Self { number, fields }
    }

    /// Returns the field at `index`, or `None` when the row is too short.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if every field is empty (e.g. a `,,` line).
    pub fn is_blank_record(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }
}

/// The tokenized table: header row followed by data rows.
///
/// A `RawTable` always has a header. It is not modified after tokenization.
/// Deserialization goes through [`RawTable::new`], so a document without rows
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTableData")]
pub struct RawTable {
    rows: Vec<RawRow>,
    blank_lines: usize,
}

#[derive(Deserialize)]
struct RawTableData {
    rows: Vec<RawRow>,
    blank_lines: usize,
}

impl TryFrom<RawTableData> for RawTable {
    type Error = IngestError;

    fn try_from(data: RawTableData) -> Result<Self> {
        Self::new(data.rows, data.blank_lines)
    }
}

impl RawTable {
    /// Creates a table from tokenized rows.
    ///
    /// The first row is the header. Fails with [`IngestError::EmptyInput`] if
    /// `rows` is empty.
    pub fn new(rows: Vec<RawRow>, blank_lines: usize) -> Result<Self> {
        if rows.is_empty() {
            return Err(IngestError::EmptyInput);
        }
        Ok(Self { rows, blank_lines })
    }

    /// Creates a table whose `rows` are known to start with a header.
    pub(crate) fn with_header(rows: Vec<RawRow>, blank_lines: usize) -> Self {
        debug_assert!(!rows.is_empty());
        Self { rows, blank_lines }
    }

    /// The header row.
    pub fn header(&self) -> &RawRow {
        &self.rows[0]
    }

    /// Header cell names.
    pub fn column_names(&self) -> &[String] {
        &self.header().fields
    }

    /// Number of header fields.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// All records after the header, including all-empty records.
    pub fn data_rows(&self) -> &[RawRow] {
        &self.rows[1..]
    }

    /// Data records that carry at least one non-empty field.
    pub fn populated_rows(&self) -> impl Iterator<Item = &RawRow> {
        self.data_rows().iter().filter(|row| !row.is_blank_record())
    }

    /// Count of data records that carry at least one non-empty field.
    pub fn populated_row_count(&self) -> usize {
        self.populated_rows().count()
    }

    /// Count of data records where every field is empty.
    pub fn blank_record_count(&self) -> usize {
        self.data_rows()
            .iter()
            .filter(|row| row.is_blank_record())
            .count()
    }

    /// Number of whitespace-only lines discarded by the tokenizer.
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// Every record, header included.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(number: usize, fields: &[&str]) -> RawRow {
        RawRow::new(number, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_empty_rows_rejected() {
        assert_eq!(RawTable::new(Vec::new(), 3), Err(IngestError::EmptyInput));
    }

    #[test]
    fn test_header_and_data_rows() {
        let table = RawTable::new(
            vec![row(1, &["a", "b"]), row(2, &["1", "2"]), row(3, &["", ""])],
            2,
        )
        .unwrap();

        assert_eq!(table.column_names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.data_rows().len(), 2);
        assert_eq!(table.populated_row_count(), 1);
        assert_eq!(table.blank_record_count(), 1);
        assert_eq!(table.blank_lines(), 2);
    }

    #[test]
    fn test_deserialize_requires_header() {
        let result: std::result::Result<RawTable, _> =
            serde_json::from_str(r#"{"rows":[],"blank_lines":0}"#);
        assert!(result.is_err());

        let table: RawTable = serde_json::from_str(
            r#"{"rows":[{"number":1,"fields":["a","b"]},{"number":2,"fields":["1","2"]}],"blank_lines":1}"#,
        )
        .unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.data_rows().len(), 1);
        assert_eq!(table.blank_lines(), 1);
    }

    #[test]
    fn test_absent_field() {
        let short = row(2, &["1"]);
        assert_eq!(short.field(0), Some("1"));
        assert_eq!(short.field(1), None);
        assert!(!short.is_blank_record());
    }
}
