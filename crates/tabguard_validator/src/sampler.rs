//! Per-column sampling.
//!
//! Sampling takes the first `max_samples` non-empty values in row order. There
//! is no randomness, so the same table always yields the same sample.

use tabguard_core::{ColumnSample, RawTable};

/// Draws a bounded sample of non-empty values for one column.
///
/// Rows shorter than `column_index + 1` add nothing to the sample and are
/// counted in `missing_count`. Walking stops once `max_samples` values are
/// collected.
///
/// # Example
///
/// ```rust
/// use tabguard_core::RawTableBuilder;
/// use tabguard_validator::sample_column;
///
/// let table = RawTableBuilder::new(["a"]).row(["1"]).row([""]).row(["3"]).build();
/// let sample = sample_column(&table, 0, 20);
/// assert_eq!(sample.values, vec!["1", "3"]);
/// assert_eq!(sample.empty_count, 1);
/// ```
pub fn sample_column(table: &RawTable, column_index: usize, max_samples: usize) -> ColumnSample {
    let name = table
        .column_names()
        .get(column_index)
        .cloned()
        .unwrap_or_default();
    let mut sample = ColumnSample::new(name, column_index);

    for row in table.data_rows() {
        if sample.values.len() >= max_samples {
            break;
        }
        match row.field(column_index) {
            Some("") => sample.empty_count += 1,
            Some(value) => sample.values.push(value.to_string()),
            None => sample.missing_count += 1,
        }
    }

    sample
}

/// Samples every header column of `table`, in column order.
pub fn sample_columns(table: &RawTable, max_samples: usize) -> Vec<ColumnSample> {
    (0..table.column_count())
        .map(|index| sample_column(table, index, max_samples))
        .collect()
}
