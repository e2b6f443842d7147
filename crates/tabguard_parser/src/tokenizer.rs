//! Delimited-text tokenizer.
//!
//! Splits text into records and fields with RFC 4180 quoting: fields may be
//! wrapped in `"`, a doubled `""` inside a quoted field is a literal quote, and
//! quoted fields may contain the delimiter or line breaks.
//!
//! Records end at `\n` only. A `\r` before it is stripped with the rest of the
//! field's surrounding whitespace; a bare `\r` is ordinary field content.

use csv::{ReaderBuilder, StringRecord, Terminator};
use tabguard_core::{IngestError, RawRow, RawTable, Result, delimiter_byte};
use tracing::debug;

/// Tokenizes `text` into a [`RawTable`].
///
/// Whitespace-only lines are discarded and counted. Fields are trimmed. A
/// leading byte order mark is ignored.
///
/// Quoting is recognized only when `"` is the first byte of a field, as in
/// RFC 4180. Whitespace between a delimiter and an opening quote therefore
/// leaves the quotes as literal text and a quoted delimiter splits the field:
/// `Ana, "Lages, SC"` yields three fields. Trimming happens after splitting.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] if no non-blank line remains
/// - [`IngestError::InvalidConfig`] if `delimiter` cannot be used
///
/// # Example
///
/// ```rust
/// use tabguard_parser::tokenize;
///
/// let table = tokenize("name,city\n\"Silva, Ana\",Lages\n", ',').unwrap();
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.data_rows()[0].field(0), Some("Silva, Ana"));
/// ```
pub fn tokenize(text: &str, delimiter: char) -> Result<RawTable> {
    let delimiter = delimiter_byte(delimiter)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .quote(b'"')
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut blank_lines = count_blank_lines(text);
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let start = reader.position().byte() as usize;
        let more = reader
            .read_record(&mut record)
            .map_err(|e| IngestError::Malformed(e.to_string()))?;
        if !more {
            break;
        }
        let end = reader.position().byte() as usize;

        // Whitespace-only lines come back as one-field records; they were
        // already counted by `count_blank_lines`.
        if text.get(start..end).is_some_and(|span| span.trim().is_empty()) {
            continue;
        }

        blank_lines = blank_lines.saturating_sub(quoted_blank_lines(&record));
        let fields = record.iter().map(|f| f.trim().to_string()).collect();
        rows.push(RawRow::new(rows.len() + 1, fields));
    }

    debug!(records = rows.len(), blank_lines, "Tokenized input");

    RawTable::new(rows, blank_lines)
}

/// Physical lines made only of whitespace.
fn count_blank_lines(text: &str) -> usize {
    text.lines().filter(|line| line.trim().is_empty()).count()
}

/// Whitespace-only physical lines that sit entirely inside a quoted field.
fn quoted_blank_lines(record: &StringRecord) -> usize {
    record
        .iter()
        .map(|field| {
            let segments: Vec<&str> = field.split('\n').collect();
            if segments.len() < 3 {
                return 0;
            }
            segments[1..segments.len() - 1]
                .iter()
                .filter(|s| s.trim().is_empty())
                .count()
        })
        .sum()
}
