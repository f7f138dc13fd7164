//! Core utilities and types for the DeadCodeTrick generator.
//!
//! This crate provides the error type, generated-file plumbing and
//! include path derivation shared by the other `deadcode` crates.

mod error;
mod file;
mod include;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, PreviewFile, read_lines, write_file};
// Include paths
pub use include::{include_base, include_path, to_slash};
