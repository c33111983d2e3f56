//! Network types and blockchain-network selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key namespace used by Solana network records (e.g. "solana:devnet")
const SOLANA_KEY_PREFIX: &str = "solana";

/// Supported wallet network types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// EVM-compatible chains (key namespace "eip155")
    Evm,
    /// Solana clusters (key namespace "solana")
    Solana,
}

impl NetworkType {
    /// Wire identifier sent to the platform (e.g. in `/auth-nonce`)
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Evm => "evm",
            NetworkType::Solana => "solana",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "evm" => Ok(NetworkType::Evm),
            "solana" | "sol" => Ok(NetworkType::Solana),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// One blockchain network as registered on the platform
///
/// Immutable once fetched; the SDK selects (never mutates) one of these
/// records and caches it for all subsequent deposit/order/withdraw calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// Chain id with namespace (e.g. "eip155:97", "solana:devnet")
    pub key: String,
    /// Human-readable network name
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Platform deposit address on this network
    pub deposit_address: String,
    /// Token factory contract address (EVM) or fee-collector address (Solana)
    pub token_factory_contract_address: String,
    /// Token creation fee in the chain's smallest unit, as a string to
    /// preserve precision
    pub token_creation_fee: String,
    /// Template URL, replace `{address}` with an actual address
    #[serde(default)]
    pub address_explorer_url: Option<String>,
    /// Template URL, replace `{hash}` with an actual tx hash
    #[serde(default)]
    pub transaction_explorer_url: Option<String>,
    #[serde(default)]
    pub last_indexed_block_number: Option<String>,
}

/// Select the single network record matching the requested type and chain id.
///
/// Solana (or an absent chain id) selects the first record whose key is in
/// the Solana namespace; otherwise the first record whose key ends with the
/// decimal chain id. Returns `None` when nothing matches; callers must
/// handle the missing-network case explicitly.
pub fn filter_blockchain_network<'a>(
    networks: &'a [NetworkInfo],
    network_type: NetworkType,
    chain_id: Option<u64>,
) -> Option<&'a NetworkInfo> {
    match (network_type, chain_id) {
        (NetworkType::Solana, _) | (_, None) => networks
            .iter()
            .find(|n| n.key.starts_with(SOLANA_KEY_PREFIX)),
        (_, Some(id)) => {
            let suffix = format!(":{}", id);
            networks.iter().find(|n| n.key.ends_with(&suffix))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(key: &str) -> NetworkInfo {
        NetworkInfo {
            key: key.to_string(),
            name: key.to_string(),
            image_url: None,
            deposit_address: "0x0000000000000000000000000000000000000001".to_string(),
            token_factory_contract_address: "0x0000000000000000000000000000000000000002"
                .to_string(),
            token_creation_fee: "1000000000000000".to_string(),
            address_explorer_url: None,
            transaction_explorer_url: None,
            last_indexed_block_number: None,
        }
    }

    #[test]
    fn test_filter_matches_evm_chain_id() {
        let list = vec![network("solana:devnet"), network("eip155:97")];
        let found = filter_blockchain_network(&list, NetworkType::Evm, Some(97)).unwrap();
        assert_eq!(found.key, "eip155:97");
    }

    #[test]
    fn test_filter_solana_ignores_chain_id() {
        let list = vec![network("eip155:97"), network("solana:devnet")];
        let found = filter_blockchain_network(&list, NetworkType::Solana, Some(97)).unwrap();
        assert_eq!(found.key, "solana:devnet");
    }

    #[test]
    fn test_filter_missing_chain_id_falls_back_to_solana() {
        let list = vec![network("eip155:97"), network("solana:devnet")];
        let found = filter_blockchain_network(&list, NetworkType::Evm, None).unwrap();
        assert_eq!(found.key, "solana:devnet");
    }

    #[test]
    fn test_filter_unknown_chain_id_returns_none() {
        let list = vec![network("eip155:97"), network("solana:devnet")];
        assert!(filter_blockchain_network(&list, NetworkType::Evm, Some(56)).is_none());
    }

    #[test]
    fn test_filter_does_not_match_chain_id_suffix_of_longer_id() {
        // ":97" must not match "eip155:197"
        let list = vec![network("eip155:197")];
        assert!(filter_blockchain_network(&list, NetworkType::Evm, Some(97)).is_none());
    }

    #[test]
    fn test_filter_empty_list_returns_none() {
        assert!(filter_blockchain_network(&[], NetworkType::Solana, None).is_none());
    }

    #[test]
    fn test_network_type_round_trip() {
        assert_eq!("evm".parse::<NetworkType>().unwrap(), NetworkType::Evm);
        assert_eq!("solana".parse::<NetworkType>().unwrap(), NetworkType::Solana);
        assert!("bitcoin".parse::<NetworkType>().is_err());
        assert_eq!(NetworkType::Evm.to_string(), "evm");
    }
}
