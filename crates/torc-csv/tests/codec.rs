//! End-to-end decode/encode behavior.

use torc_csv::{CsvOptions, Record, decode, encode};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn empty_and_whitespace_input_decode_to_empty_table() {
    let options = CsvOptions::default();
    assert!(decode("", &options).is_empty());
    assert!(decode("   ", &options).is_empty());
    assert!(decode("\n\n\n", &options).is_empty());
}

#[test]
fn header_only_input_decodes_to_empty_table() {
    assert!(decode("a,b,c", &CsvOptions::default()).is_empty());
}

#[test]
fn basic_table_decodes_in_order() {
    let table = decode("name,age,city\nJohn,25,NYC\nJane,30,LA", &CsvOptions::default());
    assert_eq!(
        table,
        vec![
            record(&[("name", "John"), ("age", "25"), ("city", "NYC")]),
            record(&[("name", "Jane"), ("age", "30"), ("city", "LA")]),
        ]
    );
}

#[test]
fn quoted_field_keeps_embedded_delimiter() {
    let table = decode(
        "name,description\nJohn,\"Hello, World\"",
        &CsvOptions::default(),
    );
    assert_eq!(
        table,
        vec![record(&[("name", "John"), ("description", "Hello, World")])]
    );
}

#[test]
fn doubled_quotes_decode_to_literal_quotes() {
    let table = decode(
        "name,quote\nJohn,\"He said \"\"Hello\"\"\"",
        &CsvOptions::default(),
    );
    assert_eq!(
        table,
        vec![record(&[("name", "John"), ("quote", "He said \"Hello\"")])]
    );
}

#[test]
fn mixed_line_endings_decode_like_plain_newlines() {
    let options = CsvOptions::default();
    let mixed = decode("a,b\r\n1,2\r3,4\n5,6", &options);
    let plain = decode("a,b\n1,2\n3,4\n5,6", &options);
    assert_eq!(mixed, plain);
    assert_eq!(mixed.len(), 3);
}

#[test]
fn blank_lines_are_dropped_by_default() {
    let table = decode("a,b\n\n1,2\n   \n3,4\n", &CsvOptions::default());
    assert_eq!(table.len(), 2);
}

#[test]
fn custom_delimiter_decodes() {
    let options = CsvOptions::default().with_delimiter(';');
    let table = decode("name;age\nJohn;25", &options);
    assert_eq!(table, vec![record(&[("name", "John"), ("age", "25")])]);
}

#[test]
fn encode_matches_expected_layout() {
    let table = vec![
        record(&[("name", "John"), ("age", "25"), ("city", "NYC")]),
        record(&[("name", "Jane"), ("age", "30"), ("city", "LA")]),
    ];
    assert_eq!(
        encode(&table, &CsvOptions::default()),
        "name,age,city\nJohn,25,NYC\nJane,30,LA"
    );
}

#[test]
fn decode_normalizes_whitespace_then_round_trips() {
    let options = CsvOptions::default();
    let original = "name , age\r\n John ,  25 \r Jane , 30 ";
    let once = decode(original, &options);
    let twice = decode(&encode(&once, &options), &options);
    assert_eq!(once, twice);
    assert_eq!(once[0].get("name"), Some("John"));
    assert_eq!(once[1].get("age"), Some("30"));
}
