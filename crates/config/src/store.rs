use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of a deployment data store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one `<chainId>.json` file per network
    pub deployments_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(deployments_dir: impl Into<PathBuf>) -> Self {
        Self {
            deployments_dir: deployments_dir.into(),
        }
    }

    /// Load from a TOML file. A relative `deployments_dir` is taken relative
    /// to the directory containing the file.
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&contents)?;

        if config.deployments_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.deployments_dir = parent.join(&config.deployments_dir);
            }
        }

        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;

        Ok(config)
    }
}
