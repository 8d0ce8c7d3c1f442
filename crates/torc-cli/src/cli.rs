//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "torc",
    version,
    about = "Utility toolbox: delimited-text codec, validators, and converters",
    long_about = "Utility toolbox for everyday data chores.\n\n\
                  Decode and encode delimited text (CSV and friends), validate\n\
                  URLs and email addresses, convert temperatures, and reshape\n\
                  string casing."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode, encode, and reshape delimited text.
    #[command(subcommand)]
    Csv(CsvCommand),

    /// Validate URLs or email addresses.
    #[command(subcommand)]
    Validate(ValidateCommand),

    /// Convert a temperature between Celsius, Fahrenheit, and Kelvin.
    Temp(TempArgs),

    /// Change the capitalization of a string.
    Text(TextArgs),
}

#[derive(Subcommand)]
pub enum CsvCommand {
    /// Decode a file and render it as a table.
    View(ViewArgs),

    /// Decode a file to a JSON array of objects.
    ToJson(ToJsonArgs),

    /// Encode a JSON array of objects as delimited text.
    FromJson(FromJsonArgs),

    /// Re-encode a file with a different output delimiter.
    Convert(ConvertArgs),
}

/// Options shared by every decoding command.
#[derive(Args)]
pub struct DecodeOpts {
    /// Field delimiter.
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Quote character.
    #[arg(long, default_value = "\"")]
    pub quote: char,

    /// Keep surrounding whitespace in decoded fields.
    #[arg(long = "no-trim")]
    pub no_trim: bool,

    /// Parse blank lines as rows of empty fields instead of dropping them.
    #[arg(long = "keep-empty-lines")]
    pub keep_empty_lines: bool,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Delimited-text file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

#[derive(Args)]
pub struct ToJsonArgs {
    /// Delimited-text file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,

    /// Write output here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct FromJsonArgs {
    /// JSON file holding an array of flat objects.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Field delimiter for the encoded output.
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Quote character for the encoded output.
    #[arg(long, default_value = "\"")]
    pub quote: char,

    /// Quote every field, not just the ones that need it.
    #[arg(long = "always-quote")]
    pub always_quote: bool,

    /// Write output here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Delimited-text file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,

    /// Delimiter to use in the re-encoded output.
    #[arg(long = "to-delimiter", value_name = "CHAR")]
    pub to_delimiter: char,

    /// Quote every field in the output.
    #[arg(long = "always-quote")]
    pub always_quote: bool,

    /// Write output here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ValidateCommand {
    /// Validate one or more URLs.
    Url(ValidateUrlArgs),

    /// Validate one or more email addresses.
    Email(ValidateEmailArgs),
}

#[derive(Args)]
pub struct ValidateUrlArgs {
    /// Values to check.
    #[arg(value_name = "URL", required = true)]
    pub values: Vec<String>,

    /// Reject plain HTTP URLs.
    #[arg(long = "https-only")]
    pub https_only: bool,
}

#[derive(Args)]
pub struct ValidateEmailArgs {
    /// Values to check.
    #[arg(value_name = "EMAIL", required = true)]
    pub values: Vec<String>,

    /// Apply stricter length and label rules.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct TempArgs {
    /// Temperature reading to convert.
    #[arg(value_name = "VALUE")]
    pub value: f64,

    /// Scale of the input value.
    #[arg(long, value_enum)]
    pub from: ScaleArg,

    /// Scale to convert to.
    #[arg(long, value_enum)]
    pub to: ScaleArg,
}

/// CLI temperature scale choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ScaleArg {
    #[value(alias = "celsius")]
    C,
    #[value(alias = "fahrenheit")]
    F,
    #[value(alias = "kelvin")]
    K,
}

#[derive(Args)]
pub struct TextArgs {
    /// Capitalization mode.
    #[arg(value_enum)]
    pub mode: TextModeArg,

    /// The string to transform.
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// CLI capitalization choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TextModeArg {
    /// Uppercase only the first character.
    First,
    /// Uppercase the first character of every word.
    Words,
    /// Uppercase everything.
    Upper,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_csv_view_with_decode_options() {
        let cli = Cli::parse_from([
            "torc", "csv", "view", "data.csv", "--delimiter", ";", "--no-trim",
        ]);
        let Command::Csv(CsvCommand::View(args)) = cli.command else {
            panic!("expected csv view");
        };
        assert_eq!(args.decode.delimiter, ';');
        assert!(args.decode.no_trim);
        assert!(!args.decode.keep_empty_lines);
    }

    #[test]
    fn parses_negative_temperature_value() {
        let cli = Cli::parse_from(["torc", "temp", "-40", "--from", "c", "--to", "f"]);
        let Command::Temp(args) = cli.command else {
            panic!("expected temp");
        };
        assert_eq!(args.value, -40.0);
    }

    #[test]
    fn validate_requires_at_least_one_value() {
        assert!(Cli::try_parse_from(["torc", "validate", "url"]).is_err());
    }
}
