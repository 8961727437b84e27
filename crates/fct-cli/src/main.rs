//! Command-line front end for the FCT harness.
//!
//! Two subcommands:
//! - `check` evaluates one value against optional bounds and prints the
//!   operator report line.
//! - `selftest` runs a measurement sequence end to end against the mock
//!   instruments and appends the verdicts to the daily log. It exercises
//!   the whole stack (switch unit, digital I/O, cover sense, color
//!   analyzer, log writer) without hardware attached.

mod config;
mod selftest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fct")]
#[command(about = "FCT station test harness", long_about = None)]
#[command(version = fct_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one value against optional bounds.
    Check {
        /// Measured value.
        value: f64,

        /// Upper bound (pass when value <= max).
        #[arg(long)]
        max: Option<f64>,

        /// Lower bound (pass when value >= min).
        #[arg(long)]
        min: Option<f64>,
    },

    /// Dry-run the station against mock instruments and log the verdicts.
    Selftest {
        /// Limits table (TOML). Uses a built-in table when absent.
        #[arg(long)]
        limits: Option<PathBuf>,

        /// Directory for the daily log file.
        #[arg(long, default_value = ".")]
        log_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { value, max, min } => {
            let pass = fct_core::check_scalar(value, max, min);
            println!("{}", fct_core::report_line(value, max, min, pass));
            if !pass {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Selftest { limits, log_dir } => {
            let limits = match limits {
                Some(path) => config::LimitsFile::load(&path)?,
                None => config::LimitsFile::builtin(),
            };
            let report = selftest::run(&limits, &log_dir)?;
            println!("{report}");
            if !report.all_passed() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
