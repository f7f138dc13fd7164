//! Self-test include generation.
//!
//! Scans a selftests directory for test headers, compares them with the
//! index left by the previous run and, when they differ, rewrites the
//! index and the `DeadCodeTrick.cpp` translation unit.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building (CodeBuilder, Indent)
//! - [`test_set`] - Collecting test headers from disk
//! - [`index`] - The persisted index of the last generation
//! - [`plan`] - Deciding whether regeneration is needed
//! - [`files`] - The generated files
//! - [`generator`] - Tying it together against a base directory

pub mod builder;
pub mod files;
pub mod generator;
pub mod index;
pub mod plan;
pub mod test_set;

pub use deadcode_core::{Error, PreviewFile, Result};
pub use generator::{GenerateOptions, GenerateResult, Generator, Scan};
pub use index::Index;
pub use plan::{Changes, Plan, Reason, plan};
pub use test_set::{TestFileSet, collect};
