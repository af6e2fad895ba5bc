//! CLI interface for fittrack.
//!
//! Each subcommand is non-interactive: tracker readings in, one summary
//! line per workout out on stdout. Diagnostics go to stderr.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::batch::{self, BatchReport};
use crate::config::{Config, OutputFormat};
use crate::model::WorkoutCode;
use crate::package::{self, demo_packages};

use format::{format_code, format_summary, format_tally};

/// fittrack — workout summaries from tracker readings.
#[derive(Debug, Parser)]
#[command(name = "fittrack", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Output format. Defaults to `default-format` from the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  fittrack show RUN 15000 1 75
  fittrack show SWM 720 1 80 25 40 --format json
  fittrack batch readings.toml
  fittrack demo

Batch file format:
  [[package]]
  code = "WLK"
  data = [9000, 1, 75, 180]"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a single workout.
    ///
    /// Values are positional, in the order listed by `fittrack codes`.
    Show {
        /// Workout code: SWM, RUN, or WLK.
        code: String,

        /// Sensor values for the workout.
        #[arg(allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// Summarize every package in a TOML batch file.
    ///
    /// Packages with an unknown code are skipped. Packages that fail to
    /// build are reported and make the command exit with an error.
    Batch {
        /// Path to the batch file.
        file: PathBuf,
    },

    /// Summarize the built-in demo packages.
    Demo,

    /// List known workout codes and the values each expects.
    Codes,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or(config.default_format);

    match cli.command {
        Command::Show { code, data } => cmd_show(&code, &data, format),
        Command::Batch { file } => {
            let packages = batch::load(&file).map_err(|e| e.to_string())?;
            info!(path = %file.display(), count = packages.len(), "loaded batch");
            cmd_batch(&batch::process(&packages), format)
        }
        Command::Demo => cmd_batch(&batch::process(&demo_packages()), format),
        Command::Codes => {
            for code in WorkoutCode::ALL {
                println!("{}", format_code(code));
            }
            Ok(())
        }
    }
}

fn cmd_show(code: &str, data: &[f64], format: OutputFormat) -> Result<(), String> {
    let workout = package::read_package(code, data)
        .map_err(|e| format!("failed to build workout: {e}"))?
        .ok_or_else(|| format!("unknown workout type '{code}'"))?;

    let summary = workout.as_training().summary();
    println!("{}", format_summary(&summary, format)?);
    Ok(())
}

fn cmd_batch(report: &BatchReport, format: OutputFormat) -> Result<(), String> {
    for summary in &report.summaries {
        println!("{}", format_summary(summary, format)?);
    }

    if report.skipped > 0 || report.failed > 0 {
        eprintln!(
            "{}",
            format_tally(report.summaries.len(), report.skipped, report.failed)
        );
    }

    if report.failed > 0 {
        return Err(format!("{} package(s) failed to build", report.failed));
    }
    Ok(())
}
