//! Table to text encoding.

use crate::options::CsvOptions;
use crate::record::Record;

/// Encode a sequence of records as delimited text.
///
/// Column order comes from the key order of the first record. A record
/// missing one of those keys contributes an empty string for it. Lines are
/// joined with `\n` regardless of the line endings any source text used.
///
/// An empty sequence encodes to an empty string.
pub fn encode(records: &[Record], options: &CsvOptions) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(encode_line(headers.iter().copied(), options));
    for record in records {
        let cells = headers.iter().map(|key| record.get(key).unwrap_or(""));
        lines.push(encode_line(cells, options));
    }
    lines.join("\n")
}

fn encode_line<'a>(fields: impl Iterator<Item = &'a str>, options: &CsvOptions) -> String {
    let mut line = String::new();
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            line.push(options.delimiter);
        }
        push_field(&mut line, field, options);
    }
    line
}

/// Append one field, quoting it when it contains the delimiter, the quote
/// character, or a line break (or unconditionally under `always_quote`).
/// Interior quote characters are doubled.
fn push_field(line: &mut String, field: &str, options: &CsvOptions) {
    let needs_quoting = options.always_quote
        || field.contains(options.delimiter)
        || field.contains(options.quote)
        || field.contains('\n')
        || field.contains('\r');

    if needs_quoting {
        line.push(options.quote);
        for ch in field.chars() {
            if ch == options.quote {
                line.push(options.quote);
            }
            line.push(ch);
        }
        line.push(options.quote);
    } else {
        line.push_str(field);
    }
}
