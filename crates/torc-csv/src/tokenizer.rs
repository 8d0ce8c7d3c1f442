//! Single-line field tokenizer.

use crate::options::CsvOptions;

/// Split one logical line into its fields, honoring quoting.
///
/// A single left-to-right scan tracks whether the cursor is inside a quoted
/// region. A doubled quote character inside quotes is an escaped literal
/// quote. The delimiter only separates fields outside quotes. The final field
/// is always pushed, so every line yields at least one field; an empty line
/// yields one empty field.
///
/// An unterminated quote is not an error: the rest of the line is taken as
/// literal field content.
pub fn split_line(line: &str, options: &CsvOptions) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == options.quote {
            if in_quotes && chars.peek() == Some(&options.quote) {
                // Escaped quote: consume both, keep one.
                current.push(options.quote);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == options.delimiter && !in_quotes {
            fields.push(finish_field(current, options));
            current = String::new();
        } else {
            current.push(ch);
        }
    }

    fields.push(finish_field(current, options));
    fields
}

fn finish_field(field: String, options: &CsvOptions) -> String {
    if options.trim_whitespace {
        field.trim().to_owned()
    } else {
        field
    }
}
