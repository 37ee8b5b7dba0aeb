//! Configuration types for BabyNameMarket deployment lookups.
//!
//! This crate provides:
//! - The network registry (name to chain id)
//! - Data store location loaded from TOML

pub mod network;
pub mod store;

pub use network::{chain_id, Network, NetworkType, UnknownNetwork, CHAIN_IDS};
pub use store::StoreConfig;
