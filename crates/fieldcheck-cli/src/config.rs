//! Configuration file support
//!
//! A small TOML file can pin defaults that flags override:
//!
//! ```toml
//! output = "json-pretty"
//! color = false
//! ```
//!
//! Discovered under the user config dir
//! (`<config>/fieldcheck/config.toml`) unless `--config` or
//! `FIELDCHECK_CONFIG` points elsewhere. Precedence is flags, then file,
//! then built-in defaults.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format ("human", "json", "json-pretty", "yaml")
    pub output: Option<String>,
    /// Default color preference
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration, preferring an explicitly given file.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(Error::FileNotFound {
                        path: explicit.to_path_buf(),
                    });
                }
                Self::parse_file(explicit)
            }
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::parse_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Default config file location under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fieldcheck").join("config.toml"))
    }

    /// The configured default output format, if recognized.
    pub fn default_output(&self) -> Option<OutputFormat> {
        match self.output.as_deref() {
            Some("human") => Some(OutputFormat::Human),
            Some("json") => Some(OutputFormat::Json),
            Some("json-pretty") => Some(OutputFormat::JsonPretty),
            Some("yaml") => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}
