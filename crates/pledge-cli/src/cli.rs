//! CLI argument definitions for the pledge sorter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pledge-sorter",
    version,
    about = "Pledge sorter - Split a membership export into per-tier name lists and label sheets",
    long_about = "Sort a membership/pledge CSV export by tier.\n\n\
                  Drops free-tier, unpaid and expired members, then writes a plain\n\
                  name list and an SVG label sheet for every remaining tier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow member names in trace-level logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort an export and write per-tier outputs.
    Run(RunArgs),

    /// Print the resolved settings.
    Settings(SettingsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Pledge export CSV (default: DEFAULT_CSV_FILE from settings, then a prompt).
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Settings file.
    #[arg(long = "settings", value_name = "PATH", default_value = pledge_ingest::SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Output directory (overrides OUTPUT_DIR from settings).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Delete an existing output directory without asking.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,

    /// Sort and lay out everything without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SettingsArgs {
    /// Settings file.
    #[arg(long = "settings", value_name = "PATH", default_value = pledge_ingest::SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Print the settings as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
