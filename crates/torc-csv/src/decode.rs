//! Text to table decoding.

use crate::options::CsvOptions;
use crate::record::Record;
use crate::tokenizer::split_line;

/// Decode delimited text into a sequence of records.
///
/// The first non-suppressed line is the header; its fields become the column
/// names, in order. Every following line decodes to one record. Rows shorter
/// than the header are padded with empty strings; extra fields beyond the
/// header width are dropped.
///
/// Empty or all-whitespace input decodes to an empty table, as does input
/// consisting of a header with no data rows.
pub fn decode(text: &str, options: &CsvOptions) -> Vec<Record> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = split_lines(text);
    if options.skip_empty_lines {
        lines.retain(|line| !line.trim().is_empty());
    }

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Vec::new();
    };
    let headers = split_line(header_line, options);
    if headers.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(data_lines.len());
    for line in data_lines {
        let mut fields = split_line(line, options);
        // Pad short rows; surplus fields past the header width are dropped.
        fields.resize(headers.len(), String::new());
        let record = headers
            .iter()
            .cloned()
            .zip(fields)
            .collect::<Record>();
        records.push(record);
    }
    records
}

/// Split input into logical lines on `\r\n`, `\r`, or `\n`, in any mix.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_line_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_segment() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn blank_lines_parse_as_empty_rows_when_kept() {
        let options = CsvOptions::default().with_skip_empty_lines(false);
        let table = decode("a,b\n\nx,y", &options);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].get("a"), Some(""));
        assert_eq!(table[0].get("b"), Some(""));
        assert_eq!(table[1].get("a"), Some("x"));
    }

    #[test]
    fn short_rows_pad_and_long_rows_truncate() {
        let table = decode("a,b,c\n1\n1,2,3,4", &CsvOptions::default());
        assert_eq!(table[0].get("b"), Some(""));
        assert_eq!(table[0].get("c"), Some(""));
        assert_eq!(table[1].get("c"), Some("3"));
        assert_eq!(table[1].len(), 3);
    }
}
