//! Zine folding guide CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use zine_cli::commands::{run_check, run_codes, run_decode, run_encode, run_share, run_show};
use zine_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_check, print_codes, print_decode, print_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Encode(args) => {
            println!("{}", run_encode(&args.selection()));
            0
        }
        Command::Decode(args) => {
            print_decode(&run_decode(&args.code, args.from.as_deref()));
            0
        }
        Command::Show(args) => {
            match run_show(args.query.as_deref(), args.catalog.catalog.as_deref()) {
                Ok(result) => {
                    print_show(&result);
                    0
                }
                Err(error) => report(&error),
            }
        }
        Command::Codes(args) => match run_codes(args.catalog.as_deref()) {
            Ok(rows) => {
                print_codes(&rows);
                0
            }
            Err(error) => report(&error),
        },
        Command::Check(args) => match run_check(&args.catalog) {
            Ok(result) => {
                print_check(&result);
                if result.is_complete() { 0 } else { 1 }
            }
            Err(error) => report(&error),
        },
        Command::Share(args) => {
            println!("{}", run_share(&args.code, args.base_url.as_deref()));
            0
        }
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
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
