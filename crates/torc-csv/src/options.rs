//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how delimited text is decoded and encoded.
///
/// Constructed explicitly and passed to every codec call; there is no hidden
/// global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter. Default: `,`.
    pub delimiter: char,

    /// Quote character used to wrap fields containing the delimiter, the
    /// quote character itself, or line breaks. Default: `"`.
    pub quote: char,

    /// Drop lines that are empty after trimming before any parsing.
    /// When false, blank lines decode as rows of empty fields.
    /// Default: true.
    pub skip_empty_lines: bool,

    /// Trim surrounding whitespace from each decoded field and header.
    /// Default: true.
    pub trim_whitespace: bool,

    /// Quote every field on encode, not just the ones that need it.
    /// Decode ignores this flag. Default: false.
    pub always_quote: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            skip_empty_lines: true,
            trim_whitespace: true,
            always_quote: false,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Enable or disable dropping of blank lines.
    #[must_use]
    pub fn with_skip_empty_lines(mut self, enable: bool) -> Self {
        self.skip_empty_lines = enable;
        self
    }

    /// Enable or disable whitespace trimming of decoded fields.
    #[must_use]
    pub fn with_trim_whitespace(mut self, enable: bool) -> Self {
        self.trim_whitespace = enable;
        self
    }

    /// Enable or disable unconditional quoting on encode.
    #[must_use]
    pub fn with_always_quote(mut self, enable: bool) -> Self {
        self.always_quote = enable;
        self
    }
}
