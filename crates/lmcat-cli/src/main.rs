//! Language model catalog CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use lmcat_cli::commands::{load_config, run_build, run_check, run_extract};
use lmcat_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_catalog_summary, print_extract_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Extract(args) => {
            let result = run_extract(&args.input, &args.output_dir, &config)?;
            print_extract_summary(&result);
        }
        Command::Build(args) => {
            let result = run_build(&args.data_dir, &args.out_dir, args.styles.clone(), &config)?;
            print_catalog_summary(&result);
        }
        Command::Check(args) => {
            let result = run_check(&args.data_dir, &config)?;
            print_catalog_summary(&result);
        }
    }
    Ok(())
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_spans = !cli.no_log_spans;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        log_config_from_cli(&cli)
    }

    #[test]
    fn defaults_follow_log_config() {
        let config = config_for(&["lmcat", "check", "data"]);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(config.with_spans);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn log_flags_reach_the_config() {
        let config = config_for(&[
            "lmcat",
            "check",
            "data",
            "--log-timestamps",
            "--log-target",
            "--no-log-spans",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.with_spans);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
    }
}
