//! Otlpcheck CLI
//!
//! Command-line interface for validating OTLP/JSON payloads.
//!
//! # Usage
//!
//! ```bash
//! otlpcheck --help
//! otlpcheck validate traces.json --pretty
//! cat logs.json | otlpcheck validate --signal logs
//! otlpcheck detect metrics.json
//! ```
//!
//! `validate` exits with status 0 for a valid payload, 1 for an invalid one and
//! 2 when the input cannot be read or parsed.

#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use shared::config::{ValidationOptions, DEFAULT_CLOCK_SKEW_TOLERANCE_SECS};
use shared::models::PayloadType;
use shared::validation::{detect_payload_type, Validator};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Otlpcheck CLI - OTLP/JSON payload validator
#[derive(Parser)]
#[command(name = "otlpcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a payload and print the result as JSON
    Validate {
        /// Input file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,

        /// Require a specific signal (traces, logs or metrics)
        #[arg(long)]
        signal: Option<PayloadType>,

        /// Seconds a span may start in the future before a warning
        #[arg(
            long,
            env = "OTLPCHECK_CLOCK_SKEW_SECS",
            default_value_t = DEFAULT_CLOCK_SKEW_TOLERANCE_SECS
        )]
        clock_skew_secs: u64,
    },
    /// Print the detected payload type, or "unknown"
    Detect {
        /// Input file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match run(cli.command, std::io::stdin().lock(), &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "otlpcheck failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Executes one command, reading from `file` or `stdin` and writing to `out`.
fn run(command: Commands, stdin: impl Read, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Validate {
            file,
            pretty,
            signal,
            clock_skew_secs,
        } => {
            let options = ValidationOptions::new(clock_skew_secs).checked()?;
            let document = read_document(file.as_deref(), stdin)?;

            let validator = Validator::new(options);
            let result = match signal {
                Some(expected) => validator.validate_as(&document, expected),
                None => validator.validate(&document),
            };
            tracing::debug!(
                valid = result.valid,
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "Validation finished"
            );

            if pretty {
                serde_json::to_writer_pretty(&mut *out, &result)?;
            } else {
                serde_json::to_writer(&mut *out, &result)?;
            }
            writeln!(out)?;

            Ok(if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Detect { file } => {
            let document = read_document(file.as_deref(), stdin)?;
            let detected = detect_payload_type(&document).map_or("unknown", |t| t.as_str());
            writeln!(out, "{detected}")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_document(file: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<Value> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            text
        }
    };
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty");
    }
    serde_json::from_str(&text).context("Input is not valid JSON")
}
