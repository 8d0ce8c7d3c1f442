//! torc utility CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use torc_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;

use crate::cli::{Cli, Command, CsvCommand, LogFormatArg, ValidateCommand};
use crate::commands::{
    run_convert, run_from_json, run_temp, run_text, run_to_json, run_validate_email,
    run_validate_url, run_view,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Command::Csv(command) => {
            match command {
                CsvCommand::View(args) => run_view(args)?,
                CsvCommand::ToJson(args) => run_to_json(args)?,
                CsvCommand::FromJson(args) => run_from_json(args)?,
                CsvCommand::Convert(args) => run_convert(args)?,
            }
            Ok(0)
        }
        Command::Validate(command) => {
            let all_valid = match command {
                ValidateCommand::Url(args) => run_validate_url(args),
                ValidateCommand::Email(args) => run_validate_email(args),
            };
            Ok(if all_valid { 0 } else { 1 })
        }
        Command::Temp(args) => {
            run_temp(args)?;
            Ok(0)
        }
        Command::Text(args) => {
            run_text(args);
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
