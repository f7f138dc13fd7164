//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data for listing selftests.
#[derive(Debug)]
pub struct ListReport {
    /// Directory scanned for test headers.
    pub selftests_dir: PathBuf,
    /// Why include paths could not be derived, if they could not.
    pub warning: Option<String>,
    /// Collected headers, sorted.
    pub entries: Vec<ListEntry>,
}

/// One collected test header.
#[derive(Debug)]
pub struct ListEntry {
    pub name: String,
    pub include: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(warning) = &self.warning {
            out.warning(warning);
        }

        out.key_value("Directory", &self.selftests_dir.display().to_string());

        if self.entries.is_empty() {
            out.preformatted("No selftests found");
            return;
        }

        out.newline();
        out.section(&format!("Selftests ({})", self.entries.len()));
        for entry in &self.entries {
            match &entry.include {
                Some(include) => out.list_item(&format!("{} -> {}", entry.name, include)),
                None => out.list_item(&entry.name),
            }
        }
    }
}
