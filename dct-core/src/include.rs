//! Include path derivation.
//!
//! Generated `#include` directives are relative to the project's sources
//! root, which is found by looking for a marker segment (e.g. `Sources/`)
//! in the absolute path of the selftests directory.

use std::path::Path;

use crate::{Error, Result};

/// Render a path with forward slashes regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Derive the include base for `dir`: the piece of its path that follows
/// the first occurrence of `marker`, up to the next occurrence if any.
///
/// `/a/Sources/TArc/Selftests` with marker `Sources/` yields `TArc/Selftests`.
pub fn include_base(dir: &Path, marker: &str) -> Result<String> {
    let path = to_slash(dir);

    match path.split(marker).nth(1) {
        Some(base) => Ok(base.to_string()),
        None => Err(Error::MissingMarker {
            path,
            marker: marker.to_string(),
        }),
    }
}

/// Join an include base and a file name the way `#include` expects.
pub fn include_path(base: &str, file_name: &str) -> String {
    format!("{}/{}", base, file_name)
}
