//! Quiz bank converter CLI.

use clap::{ColorChoice, Parser};
use comfy_table::Table;
use qbank_cli::logging::{LogConfig, LogFormat, init_logging};
use qbank_cli::pipeline::{default_output_dir, run_convert};
use qbank_ingest::InputSchema;
use qbank_model::ConvertRequest;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, ConvertArgs, LogFormatArg, LogLevelArg};
use crate::summary::{apply_table_style, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Convert(args) => {
            let request = convert_request(&args);
            match run_convert(&request) {
                Ok(outcome) => {
                    print_summary(&outcome);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Schemas => {
            run_schemas();
            0
        }
    };
    std::process::exit(exit_code);
}

fn run_schemas() {
    let mut table = Table::new();
    table.set_header(vec!["Schema", "Description"]);
    apply_table_style(&mut table);
    for (name, description) in InputSchema::all() {
        table.add_row(vec![name, description]);
    }
    println!("{table}");
}

fn convert_request(args: &ConvertArgs) -> ConvertRequest {
    ConvertRequest {
        input: args.input.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.input)),
        schema: args.schema.clone(),
        default_source: args.source.clone(),
        emit_intermediate: args.emit_intermediate,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
