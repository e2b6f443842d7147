//! Errors raised while reading input files and configuration documents.

use std::path::PathBuf;
use tabguard_core::IngestError;
use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The text could not be turned into a table
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The input file has no bytes at all
    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    /// The input file exceeds the size limit
    #[error("File is too large ({size} bytes). Maximum allowed: {limit} bytes")]
    FileTooLarge {
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// The input file is not valid UTF-8
    #[error("File is not valid UTF-8 text: {0}")]
    Encoding(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
