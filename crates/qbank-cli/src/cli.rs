//! CLI argument definitions for the quiz bank converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qbank-convert",
    version,
    about = "Quiz bank converter - turn CSV question exports into the import template",
    long_about = "Convert quiz question CSV exports into the standardized two-sheet\n\
                  import format (Questions sheet plus Debug diagnostic sheet).\n\
                  Legacy positional layouts are adapted through built-in source schemas."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one question CSV into the two-sheet import format.
    Convert(ConvertArgs),

    /// List the built-in input source schemas.
    Schemas,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the question CSV export.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Input source schema (see `qbank-convert schemas`).
    #[arg(long = "schema", default_value = "standard")]
    pub schema: String,

    /// Default source tag for questions without one
    /// (default: first question's tag, else derived from the filename).
    #[arg(long = "source", value_name = "ID")]
    pub source: Option<String>,

    /// Also write the adapted header-keyed CSV next to the sheets.
    #[arg(long = "emit-intermediate")]
    pub emit_intermediate: bool,
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
