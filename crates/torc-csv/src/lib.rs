//! Delimited-text codec.
//!
//! Converts between flat delimited text (rows of fields with optional
//! quoting) and an in-memory table of uniform-keyed string records, and back.
//!
//! The codec is deliberately permissive: ragged rows are padded or truncated
//! to the header width, unterminated quotes swallow the rest of the line as
//! literal content, and an empty header yields an empty table. No input is
//! rejected; with `&str` inputs there is no ill-typed case to guard against,
//! and every other malformed shape has a documented fallback instead of an
//! error.
//!
//! Decoding and encoding are pure and synchronous. Calls share no state, so
//! they are safe to run concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use torc_csv::{CsvOptions, decode, encode};
//!
//! let options = CsvOptions::default();
//! let table = decode("name,age\nJohn,25\nJane,30", &options);
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0].get("name"), Some("John"));
//!
//! let text = encode(&table, &options);
//! assert_eq!(text, "name,age\nJohn,25\nJane,30");
//! ```

pub mod decode;
pub mod encode;
pub mod options;
pub mod record;
pub mod tokenizer;

pub use decode::decode;
pub use encode::encode;
pub use options::CsvOptions;
pub use record::{Record, Table};
pub use tokenizer::split_line;
