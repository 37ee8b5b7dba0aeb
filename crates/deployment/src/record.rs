use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view over a deployment record.
///
/// Only `address` is required. Any other keys in the record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Deployed contract address
    pub address: Address,
    /// Block the contract was deployed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Deployment transaction hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    /// Chain the record was written for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl Deployment {
    pub fn from_record(record: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(record)
    }
}
