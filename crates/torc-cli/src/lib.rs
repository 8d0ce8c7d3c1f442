//! Shared pieces of the torc CLI.

pub mod logging;
