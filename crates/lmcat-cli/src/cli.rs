//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lmcat",
    version,
    about = "Language model catalog builder",
    long_about = "Build the catalog of language models for Portuguese.\n\n\
                  `extract` turns the spreadsheet export into a metadata forest; \
                  `build` merges, validates and renders it; \
                  `check` validates without writing anything."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Skip span close events in JSON logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,

    /// TOML file overriding the source markers, vocabulary and header labels.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract the spreadsheet HTML export into a metadata forest.
    Extract(ExtractArgs),

    /// Merge, validate and render the catalog.
    Build(BuildArgs),

    /// Merge and validate the catalog without writing output.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Spreadsheet exported as HTML.
    #[arg(value_name = "INPUT_HTML")]
    pub input: PathBuf,

    /// Directory receiving one sub-directory per model.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Data directory holding `models/` and `contributors.toml`.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for the rendered site.
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Directory of `*.css` files copied next to every page.
    #[arg(long = "styles", value_name = "DIR")]
    pub styles: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Data directory holding `models/`.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
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
