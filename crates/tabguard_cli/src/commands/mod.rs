pub mod init;
pub mod inspect;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tabguard_core::ValidationConfig;
use tabguard_parser::{DEFAULT_MAX_INPUT_BYTES, detect_delimiter, parse_config_file, read_input};
use tabguard_validator::{IngestOutcome, ingest_and_validate};
use tracing::{debug, info};

/// Delimiter given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChoice {
    /// Detect per file
    Auto,
    /// Use this delimiter for every file
    Fixed(char),
}

fn parse_delimiter(value: &str) -> std::result::Result<DelimiterChoice, String> {
    match value {
        "auto" => Ok(DelimiterChoice::Auto),
        "tab" | "\\t" => Ok(DelimiterChoice::Fixed('\t')),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(DelimiterChoice::Fixed(c)),
                _ => Err(format!(
                    "expected a single character, 'tab' or 'auto', got '{value}'"
                )),
            }
        }
    }
}

/// Options shared by the commands that read input files.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Configuration file (YAML or TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field delimiter: a single character, 'tab' or 'auto'
    #[arg(short, long, value_parser = parse_delimiter)]
    delimiter: Option<DelimiterChoice>,

    /// Maximum number of values sampled per column
    #[arg(long)]
    max_samples: Option<usize>,

    /// Row count under which a small-dataset warning is raised
    #[arg(long)]
    min_rows: Option<usize>,

    /// Maximum input file size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_file_size: u64,
}

impl InputArgs {
    /// Loads the configuration file, if any, and applies command-line overrides.
    pub fn settings(&self) -> Result<RunSettings> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration: {}", path.display());
                parse_config_file(path).with_context(|| {
                    format!("Failed to load configuration file: {}", path.display())
                })?
            }
            None => ValidationConfig::default(),
        };

        if let Some(DelimiterChoice::Fixed(delimiter)) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(size) = self.max_samples {
            config.max_sample_size = size;
        }
        if let Some(rows) = self.min_rows {
            config.min_rows_warning_threshold = rows;
        }
        config.validate().context("Invalid configuration")?;

        Ok(RunSettings {
            config,
            detect_delimiter: self.delimiter == Some(DelimiterChoice::Auto),
            max_file_size: self.max_file_size,
        })
    }
}

/// Everything needed to check one file, independent of the other files.
#[derive(Debug, Clone)]
pub struct RunSettings {
    config: ValidationConfig,
    detect_delimiter: bool,
    max_file_size: u64,
}

impl RunSettings {
    /// Reads `path` and runs the full pipeline on it. Blocking.
    pub fn run(&self, path: &Path) -> Result<IngestOutcome> {
        let text = read_input(path, self.max_file_size)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;

        let mut config = self.config.clone();
        if self.detect_delimiter {
            config.delimiter = detect_delimiter(&text);
            debug!(file = %path.display(), delimiter = ?config.delimiter, "Detected delimiter");
        }

        ingest_and_validate(&text, &config).map_err(|error| {
            let context = if error.is_unreadable_input() {
                format!("Cannot process file: {}", path.display())
            } else {
                format!("Invalid settings for file: {}", path.display())
            };
            anyhow::Error::new(error).context(context)
        })
    }
}
