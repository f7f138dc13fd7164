use std::path::{Path, PathBuf};

use deadcode_core::{GeneratedFile, include_path};
use deadcode_manifest::SourceSettings;

use crate::{TestFileSet, builder::CodeBuilder};

/// The generated translation unit that includes every test header.
///
/// Referencing the anchor function from the test runner keeps the linker
/// from stripping the otherwise unreferenced test registrations.
pub struct DeadCodeTrickCpp<'a> {
    path: PathBuf,
    include_base: String,
    test_files: &'a TestFileSet,
    settings: &'a SourceSettings,
}

impl<'a> DeadCodeTrickCpp<'a> {
    /// `path` is relative to the base directory; `include_base` prefixes
    /// every test header include.
    pub fn new(
        path: impl Into<PathBuf>,
        include_base: impl Into<String>,
        test_files: &'a TestFileSet,
        settings: &'a SourceSettings,
    ) -> Self {
        Self {
            path: path.into(),
            include_base: include_base.into(),
            test_files,
            settings,
        }
    }
}

impl GeneratedFile for DeadCodeTrickCpp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        let function = format!("bool {}()", self.settings.function);

        CodeBuilder::cpp()
            .include(&self.settings.header)
            .each(self.test_files.iter(), |b, name| {
                b.include(&include_path(&self.include_base, name))
            })
            .blank()
            .namespace(&self.settings.namespace, |b| {
                b.braced(&function, |b| b.line("return true;"))
            })
            .build_unterminated()
    }
}
