//! Tokenizer and configuration loader for Tabguard.
//!
//! This crate turns delimited text into a [`RawTable`](tabguard_core::RawTable)
//! and loads [`ValidationConfig`](tabguard_core::ValidationConfig) from YAML or
//! TOML files. It also guards file input (extension, size, encoding) and can
//! guess the delimiter of unknown files.
//!
//! # Example
//!
//! ```rust
//! use tabguard_parser::{detect_delimiter, tokenize};
//!
//! let text = "municipio;populacao\nLages;164676\nJoinville;616317\n";
//! let table = tokenize(text, detect_delimiter(text)).expect("Failed to tokenize");
//! assert_eq!(table.column_names(), &["municipio", "populacao"]);
//! ```

mod config;
mod delimiter;
mod error;
mod input;
mod tokenizer;

pub use config::*;
pub use delimiter::*;
pub use error::*;
pub use input::*;
pub use tokenizer::*;
