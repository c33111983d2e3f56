//! SDK construction options

use launchpad_core::{NetworkType, SdkError, SdkResult};
use launchpad_wallet::{Cluster, EvmWalletOptions, SolanaWalletOptions, Wallet};

/// Everything needed to construct a [`crate::LaunchpadSdk`]
///
/// One options set per wallet; the network type decides which credential
/// fields are consumed. Use [`SdkOptions::evm`] or [`SdkOptions::solana`]
/// rather than filling the struct by hand.
#[derive(Clone)]
pub struct SdkOptions {
    pub server_url: Option<String>,
    /// Hex-encoded secp256k1 key (EVM) or base64/hex keypair bytes (Solana)
    pub private_key: Option<String>,
    pub network: NetworkType,
    pub chain_id: Option<u64>,
    /// EVM JSON-RPC endpoint, or an override of the Solana cluster's
    /// public RPC endpoint
    pub rpc_url: Option<String>,
    /// Solana cluster; ignored for EVM
    pub cluster: Option<Cluster>,
}

impl SdkOptions {
    /// Options for an EVM-backed SDK instance
    pub fn evm(
        server_url: impl Into<String>,
        private_key: impl Into<String>,
        chain_id: u64,
        rpc_url: impl Into<String>,
    ) -> Self {
        Self {
            server_url: Some(server_url.into()),
            private_key: Some(private_key.into()),
            network: NetworkType::Evm,
            chain_id: Some(chain_id),
            rpc_url: Some(rpc_url.into()),
            cluster: None,
        }
    }

    /// Options for a Solana-backed SDK instance
    pub fn solana(
        server_url: impl Into<String>,
        private_key: impl Into<String>,
        chain_id: u64,
        cluster: Cluster,
    ) -> Self {
        Self {
            server_url: Some(server_url.into()),
            private_key: Some(private_key.into()),
            network: NetworkType::Solana,
            chain_id: Some(chain_id),
            rpc_url: None,
            cluster: Some(cluster),
        }
    }

    /// Build the wallet variant these options describe
    pub fn build_wallet(&self) -> SdkResult<Wallet> {
        match self.network {
            NetworkType::Evm => Wallet::evm(EvmWalletOptions {
                server_url: self.server_url.clone(),
                private_key: self.private_key.clone(),
                chain_id: self.chain_id,
                rpc_url: self.rpc_url.clone(),
            }),
            NetworkType::Solana => Wallet::solana(SolanaWalletOptions {
                server_url: self.server_url.clone(),
                private_key: self.private_key.clone(),
                chain_id: self.chain_id,
                cluster: self.cluster,
                rpc_url: self.rpc_url.clone(),
            }),
        }
    }

    pub(crate) fn server_url(&self) -> SdkResult<&str> {
        self.server_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SdkError::config("server URL is required"))
    }
}

impl std::fmt::Debug for SdkOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkOptions")
            .field("server_url", &self.server_url)
            .field("network", &self.network)
            .field("chain_id", &self.chain_id)
            .field("rpc_url", &self.rpc_url)
            .field("cluster", &self.cluster)
            .finish()
    }
}
