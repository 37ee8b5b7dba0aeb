//! Network registry for BabyNameMarket deployments.
//!
//! Maps the human-readable network names used by consumers to their numeric
//! chain ids. The registry is independent of which deployment files exist.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Network type (mainnet or testnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

/// A network with a known chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    /// Ethereum mainnet
    Mainnet,
    /// Ethereum Sepolia testnet
    Sepolia,
    /// Base mainnet
    Base,
    /// Base Sepolia testnet
    BaseSepolia,
}

/// Registry of network names to chain ids.
pub const CHAIN_IDS: [(&str, u64); 4] = [
    (Network::Mainnet.name(), Network::Mainnet.chain_id()),
    (Network::Sepolia.name(), Network::Sepolia.chain_id()),
    (Network::Base.name(), Network::Base.chain_id()),
    (Network::BaseSepolia.name(), Network::BaseSepolia.chain_id()),
];

/// Look up the chain id registered under `name`.
pub fn chain_id(name: &str) -> Option<u64> {
    name.parse::<Network>().ok().map(Network::chain_id)
}

impl Network {
    /// Every registered network, in registry order.
    pub const ALL: [Self; 4] = [Self::Mainnet, Self::Sepolia, Self::Base, Self::BaseSepolia];

    /// Chain ID
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Sepolia => 11155111,
            Self::Base => 8453,
            Self::BaseSepolia => 84532,
        }
    }

    /// Registry key of the network.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Base => "base",
            Self::BaseSepolia => "baseSepolia",
        }
    }

    pub const fn network_type(self) -> NetworkType {
        match self {
            Self::Mainnet | Self::Base => NetworkType::Mainnet,
            Self::Sepolia | Self::BaseSepolia => NetworkType::Testnet,
        }
    }

    /// Find the registered network for a chain id.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network.chain_id()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accepts "baseSepolia", "base-sepolia" and "base_sepolia"
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "base" => Ok(Self::Base),
            "basesepolia" => Ok(Self::BaseSepolia),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_entries() {
        assert_eq!(CHAIN_IDS.len(), 4);
        assert_eq!(chain_id("mainnet"), Some(1));
        assert_eq!(chain_id("sepolia"), Some(11155111));
        assert_eq!(chain_id("base"), Some(8453));
        assert_eq!(chain_id("baseSepolia"), Some(84532));
    }

    #[test]
    fn test_registry_ids_positive_and_unique() {
        let ids: HashSet<u64> = CHAIN_IDS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids.len(), CHAIN_IDS.len());
        assert!(ids.iter().all(|id| *id > 0));

        let names: HashSet<&str> = CHAIN_IDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), CHAIN_IDS.len());
    }

    #[test]
    fn test_network_types() {
        assert_eq!(Network::Mainnet.network_type(), NetworkType::Mainnet);
        assert_eq!(Network::Base.network_type(), NetworkType::Mainnet);
        assert_eq!(Network::Sepolia.network_type(), NetworkType::Testnet);
        assert_eq!(Network::BaseSepolia.network_type(), NetworkType::Testnet);
    }

    #[test]
    fn test_from_chain_id() {
        for network in Network::ALL {
            assert_eq!(Network::from_chain_id(network.chain_id()), Some(network));
        }
        assert_eq!(Network::from_chain_id(999), None);
    }

    #[test]
    fn test_parse_name_variants() {
        assert_eq!("baseSepolia".parse::<Network>(), Ok(Network::BaseSepolia));
        assert_eq!("base-sepolia".parse::<Network>(), Ok(Network::BaseSepolia));
        assert_eq!("BASE_SEPOLIA".parse::<Network>(), Ok(Network::BaseSepolia));
        assert_eq!("Mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!(
            "goerli".parse::<Network>(),
            Err(UnknownNetwork("goerli".to_string()))
        );
        assert_eq!(chain_id("goerli"), None);
    }

    #[test]
    fn test_display_round_trips_registry_key() {
        for (name, id) in CHAIN_IDS {
            let network: Network = name.parse().unwrap();
            assert_eq!(network.to_string(), name);
            assert_eq!(u64::from(network), id);
        }
    }

    #[test]
    fn test_serde_uses_registry_key() {
        #[derive(Deserialize)]
        struct Wrapper {
            network: Network,
        }

        let wrapper: Wrapper = toml::from_str(r#"network = "baseSepolia""#).unwrap();
        assert_eq!(wrapper.network, Network::BaseSepolia);
    }
}
