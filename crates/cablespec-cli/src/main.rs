//! cablespec - cable datasheet checking CLI.
//!
//! Runs OCR'd datasheet text through the extraction, correction and
//! validation pipeline and reports the verdict. Reads a file argument or
//! stdin (`-`), prints a human-readable report or the full JSON report,
//! and exits non-zero when the datasheet is rejected.

use anyhow::Context;
use cablespec::{
    CompositeValue, CurrentSystem, FieldData, PipelineConfig, Severity, SpecRecord, SpecReport,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for the `check` subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Full pipeline report as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "cablespec")]
#[command(about = "Check cable specifications extracted from scanned datasheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, correct, validate, classify
    Check {
        /// Datasheet text file, or `-` for stdin
        file: PathBuf,

        /// Config file (TOML or JSON); searched for as `cablespec.toml`
        /// in the working directory and its parents when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract and correct only; show the field table and correction log
    Inspect {
        /// Datasheet text file, or `-` for stdin
        file: PathBuf,

        /// Config file (TOML or JSON); searched for as `cablespec.toml`
        /// in the working directory and its parents when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cablespec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            config,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let text = read_input(&file)?;
            let report = cablespec::process(&text, &config)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print_report(&report),
            }

            if !report.is_ready() {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Inspect { file, config } => {
            let config = load_config(config.as_deref())?;
            let text = read_input(&file)?;
            let raw = cablespec::extract(&text, &config)?;
            let (corrected, log) = cablespec::correct(&raw, &config);

            print_fields(&corrected);
            if log.is_empty() {
                println!("\nNo corrections applied.");
            } else {
                println!("\nCorrections:");
                for entry in &log {
                    println!("  {entry}");
                }
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    match path {
        Some(path) => {
            let loaded = if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
                PipelineConfig::from_json_file(path)
            } else {
                PipelineConfig::from_toml_file(path)
            };
            loaded.with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => match PipelineConfig::discover()? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!("no cablespec.toml found, using defaults");
                Ok(PipelineConfig::default())
            }
        },
    }
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
    }
}

fn print_report(report: &SpecReport) {
    print_fields(&report.corrected);

    if !report.issues_fixed.is_empty() {
        println!("\nCorrections:");
        for entry in &report.issues_fixed {
            println!("  {entry}");
        }
    }

    let errors: Vec<_> = report
        .violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = report
        .violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .collect();
    if !errors.is_empty() {
        println!("\nErrors:");
        for violation in errors {
            println!("  {violation}");
        }
    }
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for violation in warnings {
            println!("  {violation}");
        }
    }

    println!("\nVerdict: {}", report.verdict);
    if let Some(classification) = &report.classification {
        println!("Category: {}", classification.category);
        println!("Keywords: {}", classification.keywords.join(", "));
    }
}

fn print_fields(record: &SpecRecord) {
    println!("Fields:");
    for (field, value) in &record.fields {
        match &value.data {
            FieldData::Unverifiable if value.raw.is_empty() => {
                println!("  {:<22} (not found)", field.label());
            }
            FieldData::Unverifiable => {
                println!("  {:<22} unverifiable: '{}'", field.label(), value.raw);
            }
            // The AC/DC designation lives in the typed payload, not the
            // canonical surface, so spell it out next to the rating.
            FieldData::Composite(CompositeValue::VoltageRating { system, .. })
                if *system != CurrentSystem::Unspecified =>
            {
                println!("  {:<22} {} ({})", field.label(), value.raw, system);
            }
            _ => println!("  {:<22} {}", field.label(), value.raw),
        }
    }
}
