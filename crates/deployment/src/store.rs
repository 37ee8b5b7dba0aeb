//! Per-network deployment records on disk.
//!
//! A store is a directory with one `<chainId>.json` file per network. Every
//! lookup goes to the filesystem, so edits to the directory are visible on the
//! next call.

use crate::{error::DeploymentError, record::Deployment};
use config::StoreConfig;
use serde_json::Value;
use std::{
    ffi::OsStr,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, trace, warn};

/// Deployment records shipped with this crate.
///
/// This is the absolute path of the source tree at build time. A binary run
/// outside that tree finds no records here and resolves every chain to
/// `None`; deployed binaries should use [`DeploymentStore::new`] or
/// [`DeploymentStore::from_config`] instead.
pub const BUNDLED_DEPLOYMENTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/deployments");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store backed by the bundled `deployments/` directory.
    ///
    /// See [`BUNDLED_DEPLOYMENTS_DIR`] for where this resolves.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_DEPLOYMENTS_DIR)
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.deployments_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the record for `chain_id`, whether or not it exists.
    pub fn path_for(&self, chain_id: u64) -> PathBuf {
        self.dir.join(format!("{chain_id}.json"))
    }

    /// Resolve the deployment record for a chain.
    ///
    /// Returns `Ok(None)` when there is no file for `chain_id`, including ids
    /// that are negative or do not fit in a `u64`. A file that exists but is
    /// not valid JSON is an error.
    pub fn get(&self, chain_id: impl TryInto<u64>) -> Result<Option<Value>, DeploymentError> {
        let Some(chain_id) = to_chain_id(chain_id) else {
            return Ok(None);
        };
        let path = self.path_for(chain_id);

        if !path.exists() {
            debug!(chain_id, path = %path.display(), "No deployment record");
            return Ok(None);
        }

        // raw bytes, so invalid UTF-8 surfaces as a parse failure
        let contents = match std::fs::read(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(DeploymentError::Io { path, source }),
        };

        let record = match serde_json::from_slice(&contents) {
            Ok(record) => record,
            Err(source) => {
                warn!(
                    chain_id,
                    path = %path.display(),
                    error = %source,
                    "Malformed deployment record"
                );
                return Err(DeploymentError::Parse { path, source });
            }
        };

        debug!(chain_id, path = %path.display(), "Loaded deployment record");
        Ok(Some(record))
    }

    /// Resolve and decode the record into a [`Deployment`].
    pub fn get_typed(
        &self,
        chain_id: impl TryInto<u64>,
    ) -> Result<Option<Deployment>, DeploymentError> {
        let Some(chain_id) = to_chain_id(chain_id) else {
            return Ok(None);
        };

        self.get(chain_id)?
            .map(|record| {
                Deployment::from_record(&record)
                    .map_err(|source| DeploymentError::Record { chain_id, source })
            })
            .transpose()
    }

    /// Chain ids that currently have a record, in ascending order.
    ///
    /// Only files named exactly `<chainId>.json` count. A missing directory
    /// is an empty store.
    pub fn chain_ids(&self) -> Result<Vec<u64>, DeploymentError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(DeploymentError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| DeploymentError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();

            if path.extension().and_then(OsStr::to_str) != Some("json") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
                continue;
            };

            // "01.json" would never be found by `path_for(1)`
            match stem.parse::<u64>() {
                Ok(id) if id.to_string() == stem => ids.push(id),
                _ => trace!(path = %path.display(), "Skipping non-record file"),
            }
        }

        ids.sort_unstable();
        trace!(dir = %self.dir.display(), count = ids.len(), "Listed deployment records");

        Ok(ids)
    }
}

fn to_chain_id(chain_id: impl TryInto<u64>) -> Option<u64> {
    let chain_id = chain_id.try_into().ok();
    if chain_id.is_none() {
        debug!("Chain id out of range, no deployment record");
    }
    chain_id
}
