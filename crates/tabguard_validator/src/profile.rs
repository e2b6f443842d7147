//! Column profiling: type verdict plus cardinality-based flags.

use crate::{Classification, TypeClassifier, sample_columns};
use std::collections::HashSet;
use tabguard_core::{ColumnProfile, ColumnSample, RawTable};

/// Samples above this size whose values are all distinct look like identifiers.
pub const IDENTIFIER_MIN_SAMPLES: usize = 10;

/// Builds a profile from a sample and its classification.
///
/// - `is_constant`: one distinct value over at least two samples
/// - `is_likely_identifier`: every sampled value distinct and more than
///   [`IDENTIFIER_MIN_SAMPLES`] samples
pub fn build_profile(sample: &ColumnSample, classification: Classification) -> ColumnProfile {
    let distinct: HashSet<&str> = sample.values.iter().map(String::as_str).collect();
    let cardinality = distinct.len();
    let sample_size = sample.len();

    let is_constant = cardinality == 1 && sample_size >= 2;
    let is_likely_identifier = cardinality == sample_size && sample_size > IDENTIFIER_MIN_SAMPLES;

    ColumnProfile {
        name: sample.name.clone(),
        index: sample.index,
        column_type: classification.column_type,
        confidence: classification.confidence,
        numeric_ratio: classification.numeric_ratio,
        cardinality,
        sample_size,
        empty_count: sample.empty_count,
        is_constant,
        is_likely_identifier,
        constant_value: is_constant.then(|| sample.values[0].clone()),
    }
}

/// Samples, classifies and profiles every column of `table`.
pub fn profile_columns(
    table: &RawTable,
    classifier: &TypeClassifier,
    max_samples: usize,
) -> Vec<ColumnProfile> {
    sample_columns(table, max_samples)
        .iter()
        .map(|sample| build_profile(sample, classifier.classify(sample)))
        .collect()
}
