//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use torc_csv::{CsvOptions, Record, decode, encode};
use torc_validate::{is_valid_email, is_valid_email_strict, is_valid_url};

use crate::cli::{
    ConvertArgs, DecodeOpts, FromJsonArgs, ScaleArg, TempArgs, TextArgs, TextModeArg, ToJsonArgs,
    ValidateEmailArgs, ValidateUrlArgs, ViewArgs,
};

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let records = decode_file(&args.input, &args.decode)?;
    if records.is_empty() {
        println!("(empty table)");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(records[0].keys().collect::<Vec<_>>());
    for record in &records {
        table.add_row(record.values().collect::<Vec<_>>());
    }
    println!("{table}");
    Ok(())
}

pub fn run_to_json(args: &ToJsonArgs) -> Result<()> {
    let records = decode_file(&args.input, &args.decode)?;
    let json = serde_json::to_string_pretty(&records)?;
    write_output(args.output.as_deref(), &json)
}

pub fn run_from_json(args: &FromJsonArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let records: Vec<Record> = serde_json::from_str(&text)
        .with_context(|| format!("parse {}", args.input.display()))?;
    info!(rows = records.len(), "loaded {}", args.input.display());

    let options = CsvOptions::default()
        .with_delimiter(args.delimiter)
        .with_quote(args.quote)
        .with_always_quote(args.always_quote);
    write_output(args.output.as_deref(), &encode(&records, &options))
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let records = decode_file(&args.input, &args.decode)?;
    let options = CsvOptions::default()
        .with_delimiter(args.to_delimiter)
        .with_quote(args.decode.quote)
        .with_always_quote(args.always_quote);
    write_output(args.output.as_deref(), &encode(&records, &options))
}

/// Check each URL; returns false if any value failed validation.
pub fn run_validate_url(args: &ValidateUrlArgs) -> bool {
    let mut all_valid = true;
    for value in &args.values {
        let valid = is_valid_url(value, args.https_only);
        print_verdict(valid, value);
        all_valid &= valid;
    }
    all_valid
}

/// Check each email address; returns false if any value failed validation.
pub fn run_validate_email(args: &ValidateEmailArgs) -> bool {
    let mut all_valid = true;
    for value in &args.values {
        let valid = if args.strict {
            is_valid_email_strict(value)
        } else {
            is_valid_email(value)
        };
        print_verdict(valid, value);
        all_valid &= valid;
    }
    all_valid
}

pub fn run_temp(args: &TempArgs) -> Result<()> {
    let converted = torc_convert::convert(args.value, scale(args.from), scale(args.to))?;
    println!(
        "{} {} = {:.2} {}",
        args.value,
        unit(args.from),
        converted,
        unit(args.to)
    );
    Ok(())
}

pub fn run_text(args: &TextArgs) {
    let transformed = match args.mode {
        TextModeArg::First => torc_text::capitalize_first(&args.text),
        TextModeArg::Words => torc_text::capitalize_words(&args.text),
        TextModeArg::Upper => torc_text::capitalize_all(&args.text),
    };
    println!("{transformed}");
}

fn decode_file(path: &Path, opts: &DecodeOpts) -> Result<Vec<Record>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let records = decode(&text, &decode_options(opts));
    info!(rows = records.len(), "decoded {}", path.display());
    Ok(records)
}

fn decode_options(opts: &DecodeOpts) -> CsvOptions {
    CsvOptions::default()
        .with_delimiter(opts.delimiter)
        .with_quote(opts.quote)
        .with_trim_whitespace(!opts.no_trim)
        .with_skip_empty_lines(!opts.keep_empty_lines)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("write {}", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn print_verdict(valid: bool, value: &str) {
    if valid {
        println!("valid    {value}");
    } else {
        println!("invalid  {value}");
    }
}

fn scale(arg: ScaleArg) -> torc_convert::Scale {
    match arg {
        ScaleArg::C => torc_convert::Scale::Celsius,
        ScaleArg::F => torc_convert::Scale::Fahrenheit,
        ScaleArg::K => torc_convert::Scale::Kelvin,
    }
}

fn unit(arg: ScaleArg) -> &'static str {
    match arg {
        ScaleArg::C => "°C",
        ScaleArg::F => "°F",
        ScaleArg::K => "K",
    }
}
