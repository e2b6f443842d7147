use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tabguard_core::ColumnProfile;
use tabguard_validator::{Band, IngestOutcome, MessageLevel, StatRow};

/// Outcome of checking one file.
pub type FileResult = (PathBuf, Result<IngestOutcome>);

/// Returns true if the file passes, treating warnings as failures under `strict`.
pub fn passed(result: &Result<IngestOutcome>, strict: bool) -> bool {
    match result {
        Ok(outcome) => outcome.report.is_valid && !(strict && outcome.report.has_warnings()),
        Err(_) => false,
    }
}

pub fn print_validation_results(results: &[FileResult], strict: bool, format: &str) -> Result<()> {
    match format {
        "json" => print_json_results(results, strict),
        _ => {
            for (path, result) in results {
                match result {
                    Ok(outcome) => print_text_report(path, outcome, passed(result, strict)),
                    Err(error) => print_error(&format!("{}: {error:#}", path.display())),
                }
            }
            Ok(())
        }
    }
}

fn print_text_report(path: &Path, outcome: &IngestOutcome, passed: bool) {
    println!("\n{}", "═".repeat(60));
    println!("{}", format!("  VALIDATION REPORT: {}", path.display()).bold());
    println!("{}", "═".repeat(60));

    if passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    for (level, heading) in [
        (MessageLevel::Error, "Errors:".red().bold()),
        (MessageLevel::Warning, "Warnings:".yellow().bold()),
        (MessageLevel::Info, "Suggestions:".blue().bold()),
    ] {
        let messages: Vec<_> = outcome.messages.iter().filter(|m| m.level == level).collect();
        if messages.is_empty() {
            continue;
        }
        println!("\n{}", heading);
        for (i, message) in messages.iter().enumerate() {
            let line = format!("{}: {}", message.title, message.message);
            let line = match level {
                MessageLevel::Error => line.red(),
                MessageLevel::Warning => line.yellow(),
                _ => line.normal(),
            };
            println!("  {}. {}", i + 1, line);
        }
    }

    for message in outcome
        .messages
        .iter()
        .filter(|m| m.level == MessageLevel::Success)
    {
        println!();
        print_success(&message.message);
    }

    println!("\n{}", "Statistics:".bold());
    for row in &outcome.stats {
        println!("  {:<22}{}", format!("{}:", row.label), banded(row));
    }

    let report = &outcome.report;
    println!("\n{}", "Summary:".bold());
    println!("  Total errors:      {}", report.errors().count());
    println!("  Total warnings:    {}", report.warnings().count());
    println!("  Total suggestions: {}", report.suggestions().count());
    println!("{}", "═".repeat(60));
}

fn banded(row: &StatRow) -> ColoredString {
    let value = row.value.to_string();
    match row.band {
        Band::Healthy => value.green(),
        Band::Marginal => value.yellow(),
        Band::Poor => value.red(),
        Band::Neutral => value.normal(),
    }
}

fn print_json_results(results: &[FileResult], strict: bool) -> Result<()> {
    let files = results
        .iter()
        .map(|(path, result)| {
            Ok(match result {
                Ok(outcome) => json!({
                    "file": path.display().to_string(),
                    "passed": passed(result, strict),
                    "report": serde_json::to_value(&outcome.report)?,
                    "messages": serde_json::to_value(&outcome.messages)?,
                    "stats": serde_json::to_value(&outcome.stats)?,
                }),
                Err(error) => json!({
                    "file": path.display().to_string(),
                    "passed": false,
                    "error": format!("{error:#}"),
                }),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let output = json!({
        "checked_at": Utc::now().to_rfc3339(),
        "strict": strict,
        "files": files,
        "summary": {
            "file_count": results.len(),
            "passed_count": results.iter().filter(|(_, r)| passed(r, strict)).count(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_column_profiles(path: &Path, outcome: &IngestOutcome, format: &str) -> Result<()> {
    match format {
        "json" => {
            let output = json!({
                "checked_at": Utc::now().to_rfc3339(),
                "file": path.display().to_string(),
                "columns": serde_json::to_value(&outcome.report.columns)?,
                "stats": serde_json::to_value(&outcome.stats)?,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => print_column_table(path, outcome),
    }
    Ok(())
}

fn print_column_table(path: &Path, outcome: &IngestOutcome) {
    let stats = &outcome.report.stats;
    println!("\n{}", format!("  COLUMNS: {}", path.display()).bold());
    println!(
        "  {} records, {} columns\n",
        stats.total_rows, stats.total_columns
    );
    println!(
        "  {:>3}  {:<24}{:<13}{:>11}{:>10}{:>9}{:>7}  {}",
        "#", "Column", "Type", "Confidence", "Distinct", "Sampled", "Empty", "Flags"
    );
    for column in &outcome.report.columns {
        println!(
            "  {:>3}  {:<24}{:<13}{:>10.0}%{:>10}{:>9}{:>7}  {}",
            column.index + 1,
            column.label(),
            column.column_type.to_string(),
            column.confidence * 100.0,
            column.cardinality,
            column.sample_size,
            column.empty_count,
            flags(column)
        );
    }
}

fn flags(column: &ColumnProfile) -> String {
    let mut flags = Vec::new();
    if column.is_constant {
        flags.push("constant");
    }
    if column.is_likely_identifier {
        flags.push("identifier");
    }
    flags.join(", ")
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
