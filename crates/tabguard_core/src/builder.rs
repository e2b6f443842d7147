//! Builder for assembling a [`RawTable`] from already-split records.
//!
//! Useful when records come from somewhere other than the tokenizer, and in
//! tests.

use crate::{RawRow, RawTable};

/// Builder for creating a `RawTable`.
///
/// Rows are numbered in insertion order, the header being row 1.
///
/// # Example
///
/// ```rust
/// use tabguard_core::RawTableBuilder;
///
/// let table = RawTableBuilder::new(["city", "population"])
///     .row(["Lages", "164676"])
///     .row(["Joinville", "616317"])
///     .build();
///
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.populated_row_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RawTableBuilder {
    rows: Vec<RawRow>,
    blank_lines: usize,
}

impl RawTableBuilder {
    /// Creates a new builder with the given header.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![RawRow::new(1, collect_fields(header))],
            blank_lines: 0,
        }
    }

    /// Appends a data row.
    pub fn row<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let number = self.rows.len() + 1;
        self.rows.push(RawRow::new(number, collect_fields(fields)));
        self
    }

    /// Records how many blank lines were discarded before tokenization.
    pub fn blank_lines(mut self, count: usize) -> Self {
        self.blank_lines = count;
        self
    }

    /// Builds the table.
    pub fn build(self) -> RawTable {
        RawTable::with_header(self.rows, self.blank_lines)
    }
}

fn collect_fields<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields.into_iter().map(Into::into).collect()
}
