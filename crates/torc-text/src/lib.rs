//! String capitalization utilities.
//!
//! All functions are Unicode-aware: uppercasing a character may produce more
//! than one character (for example `ß` becomes `SS`).

/// Uppercase the first character of a string, leaving the rest unchanged.
///
/// An empty string passes through as-is.
///
/// # Example
///
/// ```
/// assert_eq!(torc_text::capitalize_first("hello world"), "Hello world");
/// assert_eq!(torc_text::capitalize_first("HELLO"), "HELLO");
/// ```
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(input.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Uppercase the first character of every whitespace-delimited word,
/// preserving all whitespace exactly.
///
/// # Example
///
/// ```
/// assert_eq!(torc_text::capitalize_words("hello world"), "Hello World");
/// assert_eq!(torc_text::capitalize_words("hello-world test"), "Hello-world Test");
/// ```
pub fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Uppercase the entire string.
pub fn capitalize_all(input: &str) -> String {
    input.to_uppercase()
}
