use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeploymentError {
    /// The record file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The record file is not valid JSON
    #[error("Malformed deployment record {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The record parsed but does not fit the typed view
    #[error("Deployment record for chain {chain_id} has unexpected shape: {source}")]
    Record {
        chain_id: u64,
        source: serde_json::Error,
    },
}
