use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{Config, Error, Result, error::SourceContext, validate::validate_config};

/// Default configuration file name, looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "dct.toml";

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a dct.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse and validate configuration content.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

/// Represents a dct.toml file, or the defaults when none exists.
#[derive(Debug)]
pub struct DctToml {
    path: Option<PathBuf>,
    config: Config,
}

impl DctToml {
    /// Open and parse a dct.toml file; a missing file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Open `dct.toml` in `base_dir` if it exists, else fall back to defaults.
    pub fn discover(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(path)
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::defaults())
        }
    }

    /// Built-in defaults with no backing file.
    pub fn defaults() -> Self {
        Self {
            path: None,
            config: Config::default(),
        }
    }

    /// Get the file path, if the configuration came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
