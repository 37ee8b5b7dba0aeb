//! Deployment lookup for the BabyNameMarket contract.
//!
//! This crate provides:
//! - [`get_deployment`] resolving a chain id to its recorded deployment
//! - [`DeploymentStore`] for stores outside the bundled `deployments/` directory
//! - Re-exports of the contract ABI and the network registry
//!
//! Records are read from disk on every call and returned as untyped JSON.

mod error;
pub mod record;
pub mod store;

pub use binding::{abi, ABI};
pub use config::{chain_id, Network, NetworkType, StoreConfig, CHAIN_IDS};
pub use error::DeploymentError;
pub use record::Deployment;
pub use store::{DeploymentStore, BUNDLED_DEPLOYMENTS_DIR};

use serde_json::Value;

/// Look up the bundled deployment record for `chain_id`.
///
/// Returns `Ok(None)` when no record exists for the chain. The bundled
/// directory is fixed at build time, see [`BUNDLED_DEPLOYMENTS_DIR`].
pub fn get_deployment(chain_id: impl TryInto<u64>) -> Result<Option<Value>, DeploymentError> {
    DeploymentStore::bundled().get(chain_id)
}
