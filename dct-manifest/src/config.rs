use serde::Deserialize;

/// Root of `dct.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where test headers live and where outputs go
    pub layout: Layout,

    /// Shape of the generated translation unit
    pub source: SourceSettings,
}

/// File layout settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Subdirectory of the base directory scanned for test headers
    pub selftests: String,

    /// Suffix a file name must end with to count as a test header
    pub suffix: String,

    /// Index file name, inside the selftests directory
    pub index: String,

    /// Generated source path, relative to the base directory
    pub output: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            selftests: "Selftests".to_string(),
            suffix: ".h".to_string(),
            index: "index".to_string(),
            output: "DeadCodeTrick.cpp".to_string(),
        }
    }
}

/// Generated source settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSettings {
    /// Path segment after which include paths start
    pub marker: String,

    /// Companion header included before the test headers
    pub header: String,

    /// Namespace wrapping the anchor function (`a::b` is allowed)
    pub namespace: String,

    /// Name of the anchor function
    pub function: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            marker: "Sources/".to_string(),
            header: "DeadCodeTrick.h".to_string(),
            namespace: "DAVA".to_string(),
            function: "AvoidTestsStriping".to_string(),
        }
    }
}
