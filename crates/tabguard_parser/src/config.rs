//! Loading [`ValidationConfig`] from YAML and TOML documents.

use crate::{ParserError, Result};
use std::path::Path;
use tabguard_core::ValidationConfig;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a YAML string.
///
/// Missing keys take their default values. The result is validated.
///
/// # Example
///
/// ```rust
/// use tabguard_parser::parse_config_yaml;
///
/// let yaml = r#"
/// delimiter: ";"
/// max_sample_size: 50
/// "#;
///
/// let config = parse_config_yaml(yaml).unwrap();
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.min_rows_warning_threshold, 50);
/// ```
pub fn parse_config_yaml(content: &str) -> Result<ValidationConfig> {
    let config: ValidationConfig = serde_yaml_ng::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use tabguard_parser::parse_config_toml;
///
/// let toml = r#"
/// numeric_ratio_high = 0.9
/// numeric_ratio_low = 0.6
/// "#;
///
/// let config = parse_config_toml(toml).unwrap();
/// assert_eq!(config.numeric_ratio_high, 0.9);
/// ```
pub fn parse_config_toml(content: &str) -> Result<ValidationConfig> {
    let config: ValidationConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_config_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a configuration file with automatic format detection.
///
/// ```no_run
/// use tabguard_parser::parse_config_file;
/// use std::path::Path;
///
/// let config = parse_config_file(Path::new("tabguard.yml")).unwrap();
/// println!("Sampling {} values per column", config.max_sample_size);
/// ```
pub fn parse_config_file(path: &Path) -> Result<ValidationConfig> {
    let format = detect_config_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ConfigFormat::Yaml => parse_config_yaml(&content),
        ConfigFormat::Toml => parse_config_toml(&content),
    }
}
