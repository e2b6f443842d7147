//! # Tabguard Validator
//!
//! Validation engine for delimited text. This crate turns a tokenized table
//! into a [`ValidationReport`](tabguard_core::ValidationReport) and display
//! diagnostics:
//!
//! - Column sampling (first non-empty values per column)
//! - Type classification (numeric, categorical, mixed, empty)
//! - Structural checks (row and column counts, header, ragged rows)
//! - Column checks (empty, constant, identifier-like, mixed types)
//! - Diagnostics composition (titled messages and banded statistics)
//!
//! ## Example
//!
//! ```rust
//! use tabguard_core::ValidationConfig;
//! use tabguard_validator::ingest_and_validate;
//!
//! let text = "name,age\nAna,31\nBruno,27\n";
//! let outcome = ingest_and_validate(text, &ValidationConfig::default()).unwrap();
//!
//! if outcome.report.is_valid {
//!     println!("Validation passed!");
//! } else {
//!     println!("Validation failed: {:?}", outcome.report.errors().collect::<Vec<_>>());
//! }
//! ```

mod classifier;
mod diagnostics;
mod engine;
mod profile;
mod sampler;
mod structure;

pub use classifier::*;
pub use diagnostics::*;
pub use engine::*;
pub use profile::*;
pub use sampler::*;
pub use structure::*;
