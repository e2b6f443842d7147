mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::InputArgs;

#[derive(Parser)]
#[command(name = "tabguard")]
#[command(version, about = "Validate delimited text files before analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more CSV files
    Validate {
        /// Paths to the files to validate (.csv, .tsv or .txt)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        input: InputArgs,

        /// Enable strict validation mode (fail on warnings)
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Show the inferred type and profile of every column
    Inspect {
        /// Path to the file to inspect
        file: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Write a configuration file with the default settings
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration format: yaml, toml (inferred from the output path when omitted)
        #[arg(short, long, value_parser = ["yaml", "toml"])]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            files,
            input,
            strict,
            format,
        } => commands::validate::execute(&files, &input, strict, &format).await,

        Commands::Inspect {
            file,
            input,
            format,
        } => commands::inspect::execute(&file, &input, &format).await,

        Commands::Init { output, format } => {
            commands::init::execute(output.as_deref(), format.as_deref())
        }
    }
}
