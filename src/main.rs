//! roundcube-vcards - export Roundcube contacts as vCard files.
//!
//! Reads users and contacts from the Roundcube SQLite database named in the
//! config file and appends every contact's vCard to a per-user file.
//!
//! CHANGELOG:
//! - 10/16/2026 - Honour RUST_LOG levels, hint on config errors
//! - 10/16/2026 - Initial implementation

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

use roundcube_vcards::config::{RunOptions, DEFAULT_CONFIG, DEFAULT_OUT};
use roundcube_vcards::db::RowOrder;
use roundcube_vcards::output::{self, OutputControls};
use roundcube_vcards::{ExportError, ExportReport};

/// Export Roundcube contacts in vCard format from a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "roundcube-vcards")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Output directory path
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,

    /// Read users and contacts in id order instead of database order
    #[arg(long)]
    ordered: bool,

    /// Print a JSON run report instead of per-file progress
    #[arg(long)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long)]
    compact: bool,
}

fn run(cli: &Cli, output_controls: &OutputControls) -> Result<ExportReport> {
    let options = RunOptions {
        config_path: cli.config.clone(),
        out_dir: cli.out.clone(),
        order: if cli.ordered {
            RowOrder::ById
        } else {
            RowOrder::Database
        },
    };

    roundcube_vcards::run(&options, output_controls)
        .with_context(|| format!("Export to {:?} failed", options.out_dir))
}

fn is_config_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExportError>().is_some_and(ExportError::is_config)
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    match run(&cli, &output_controls) {
        Ok(report) => {
            if output_controls.json {
                output_controls.print(&report);
            }
            ExitCode::from(0)
        }
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
                if is_config_error(&e) {
                    eprintln!("Pass --config <path> to point at the JSON config file.");
                }
            }
            ExitCode::from(1)
        }
    }
}
