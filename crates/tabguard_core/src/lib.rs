//! # Tabguard Core
//!
//! Core data structures for Tabguard, a validator that decides whether an
//! untrusted delimited text file is usable as a typed table.
//!
//! This crate holds the data model shared by the tokenizer, the validator and
//! the CLI. It does no I/O and no parsing of its own.
//!
//! ## Key Concepts
//!
//! - **RawTable**: the tokenized, still-untyped rows of the input
//! - **ColumnProfile**: the inferred type plus structural flags of one column
//! - **Finding**: one validation issue with a severity and a stable code
//! - **ValidationReport**: the complete, immutable output of one validation run
//!
//! ## Example
//!
//! ```rust
//! use tabguard_core::{Finding, FindingCode, TableStatistics, ValidationReport};
//!
//! let report = ValidationReport::new(
//!     vec![Finding::warning(FindingCode::LowRowCount, "Only 3 data rows")],
//!     TableStatistics::default(),
//!     Vec::new(),
//! );
//! assert!(report.is_valid);
//! ```

pub mod builder;
pub mod column;
pub mod config;
pub mod error;
pub mod finding;
pub mod report;
pub mod table;

pub use builder::*;
pub use column::*;
pub use config::*;
pub use error::*;
pub use finding::*;
pub use report::*;
pub use table::*;
