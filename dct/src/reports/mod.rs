//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::{ListEntry, ListReport};
pub use output::{Report, TerminalOutput};
