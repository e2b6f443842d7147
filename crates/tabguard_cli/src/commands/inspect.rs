use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::InputArgs;
use crate::output;

pub async fn execute(file: &Path, input: &InputArgs, format: &str) -> Result<()> {
    info!("Inspecting columns: {}", file.display());

    let settings = input.settings()?;
    let path = file.to_path_buf();
    let outcome = tokio::task::spawn_blocking(move || settings.run(&path))
        .await
        .context("Inspection task failed")??;

    output::print_column_profiles(file, &outcome, format)
}
