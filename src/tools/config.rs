use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{HuffError, Result};

/// Where the driver looks for its configuration when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Text file to compress.
    pub path: Option<PathBuf>,
    /// Where the run summary is written. `xml` is accepted as the older name.
    #[serde(alias = "xml")]
    pub report: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            report: PathBuf::from("report.xml"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| HuffError::MissingConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(HuffError::InvalidConfig)
    }
}
