//! Main validation engine.
//!
//! This module provides the [`TableValidator`] that runs the whole pipeline:
//! tokenize, sample, classify, validate and compose diagnostics.

use crate::{
    DiagnosticMessage, StatRow, StructuralValidator, TypeClassifier, compose, profile_columns,
    summarize,
};
use serde::Serialize;
use tabguard_core::{RawTable, Result, ValidationConfig, ValidationReport};
use tabguard_parser::tokenize;
use tracing::info;

/// Everything one ingestion run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    /// The validation report
    pub report: ValidationReport,
    /// Display messages composed from the report
    pub messages: Vec<DiagnosticMessage>,
    /// Labeled statistics composed from the report
    pub stats: Vec<StatRow>,
}

/// Main validation engine for delimited text.
///
/// Holds no state between runs; a single validator can check any number of
/// inputs, from any number of threads.
///
/// # Example
///
/// ```rust
/// use tabguard_core::ValidationConfig;
/// use tabguard_validator::TableValidator;
///
/// let validator = TableValidator::new(ValidationConfig::default()).unwrap();
/// let outcome = validator.ingest("a,b\n1,2\n3,4\n5,6").unwrap();
///
/// if outcome.report.is_valid {
///     println!("Validation passed!");
/// } else {
///     for finding in outcome.report.errors() {
///         println!("Error: {}", finding);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TableValidator {
    config: ValidationConfig,
    classifier: TypeClassifier,
    structural_validator: StructuralValidator,
}

impl TableValidator {
    /// Creates a validator, rejecting unusable configurations.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: TypeClassifier::from_config(&config),
            structural_validator: StructuralValidator::from_config(&config),
            config,
        })
    }

    /// Validates an already tokenized table.
    pub fn validate_table(&self, table: &RawTable) -> ValidationReport {
        let profiles = profile_columns(table, &self.classifier, self.config.max_sample_size);
        self.structural_validator.validate(table, &profiles)
    }

    /// Tokenizes and validates `text`, then composes diagnostics.
    ///
    /// # Errors
    ///
    /// Fails only when the text cannot be tokenized at all, most notably with
    /// [`IngestError::EmptyInput`](tabguard_core::IngestError::EmptyInput).
    /// Every data-quality problem is reported inside the returned report.
    pub fn ingest(&self, text: &str) -> Result<IngestOutcome> {
        let table = tokenize(text, self.config.delimiter)?;
        let report = self.validate_table(&table);

        info!(
            valid = report.is_valid,
            rows = report.stats.total_rows,
            columns = report.stats.total_columns,
            errors = report.errors().count(),
            warnings = report.warnings().count(),
            "Validation complete"
        );

        Ok(IngestOutcome {
            messages: compose(&report),
            stats: summarize(&report),
            report,
        })
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        let config = ValidationConfig::default();
        Self {
            classifier: TypeClassifier::from_config(&config),
            structural_validator: StructuralValidator::from_config(&config),
            config,
        }
    }
}

/// Runs the full pipeline on `text` with `config`.
///
/// Convenience wrapper around [`TableValidator::ingest`].
pub fn ingest_and_validate(text: &str, config: &ValidationConfig) -> Result<IngestOutcome> {
    TableValidator::new(config.clone())?.ingest(text)
}
