// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the DeadCodeTrick generator.
//!
//! Every setting has a default matching the stock layout, so `dct.toml`
//! is optional. When present it is parsed with serde and validated with
//! miette diagnostics pointing back into the file.

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, Layout, SourceSettings};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, DctToml};
