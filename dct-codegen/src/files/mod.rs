//! The files a regeneration writes.

mod dead_code_trick;
mod index_file;

pub use dead_code_trick::DeadCodeTrickCpp;
pub use index_file::IndexFile;
