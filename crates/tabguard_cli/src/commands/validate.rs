use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::InputArgs;
use crate::output::{self, FileResult};

pub async fn execute(files: &[PathBuf], input: &InputArgs, strict: bool, format: &str) -> Result<()> {
    info!("Validating {} file(s)", files.len());
    info!("Strict mode: {}", strict);

    let settings = input.settings()?;

    if format != "json" {
        output::print_info(&format!("Checking {} file(s)", files.len()));
    }

    // One blocking pipeline per file; nothing is shared between them
    let tasks: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let settings = settings.clone();
            tokio::task::spawn_blocking(move || {
                let result = settings.run(&path);
                (path, result)
            })
        })
        .collect();

    let mut results: Vec<FileResult> = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.context("Validation task failed")?);
    }

    output::print_validation_results(&results, strict, format)?;

    let failed = results
        .iter()
        .filter(|(_, result)| !output::passed(result, strict))
        .count();
    if failed > 0 {
        info!("{} of {} file(s) failed validation", failed, results.len());
        std::process::exit(1);
    }

    Ok(())
}
