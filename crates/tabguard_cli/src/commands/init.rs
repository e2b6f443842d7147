use anyhow::{Context, Result};
use std::path::Path;
use tabguard_core::ValidationConfig;
use tabguard_parser::{ConfigFormat, detect_config_format};
use tracing::info;

use crate::output;

pub fn execute(output_path: Option<&Path>, format: Option<&str>) -> Result<()> {
    let format = match (format, output_path) {
        (Some("toml"), _) => ConfigFormat::Toml,
        (Some(_), _) | (None, None) => ConfigFormat::Yaml,
        (None, Some(path)) => detect_config_format(path).with_context(|| {
            format!(
                "Cannot infer configuration format from: {} (use --format)",
                path.display()
            )
        })?,
    };
    info!("Writing default configuration as {:?}", format);

    let config = ValidationConfig::default();
    let content = match format {
        ConfigFormat::Yaml => serde_yaml_ng::to_string(&config)
            .context("Failed to serialize configuration to YAML")?,
        ConfigFormat::Toml => {
            toml::to_string(&config).context("Failed to serialize configuration to TOML")?
        }
    };

    // Output to file or stdout
    if let Some(path) = output_path {
        std::fs::write(path, content.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path.display()))?;
        output::print_success(&format!("Configuration written to: {}", path.display()));
    } else {
        print!("{}", content);
    }

    Ok(())
}
