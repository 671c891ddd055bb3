//! vvdata CLI library
//!
//! This library provides the command-line interface that keeps a verse data
//! tree in step with its raw transcripts.

pub mod commands;
pub mod config;
pub mod error;
pub mod headers;
pub mod input;
pub mod output;
pub mod progress;
pub mod vcs;

pub use error::{CliError, CliResult};
