//! Shared wallet capability surface
//!
//! Both network variants expose the same capability set behind
//! [`WalletAdapter`]; the [`Wallet`] enum selects one concrete variant at
//! construction and never re-dispatches afterwards.

use async_trait::async_trait;
use launchpad_core::{NetworkType, SdkResult};

use crate::evm::{EvmWallet, EvmWalletOptions};
use crate::solana::{SolanaWallet, SolanaWalletOptions};

/// Read-only signing context derived at wallet construction
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Wallet address in the chain's native encoding
    pub address: String,
    /// Hostname of the platform server, embedded in sign-in messages
    pub domain: String,
    /// Web origin of the platform server
    pub origin: String,
    pub network: NetworkType,
    pub chain_id: u64,
}

/// Inputs for building and signing a sign-in message
#[derive(Debug, Clone)]
pub struct SignMessageParams {
    /// Human-readable statement (e.g. "Sign in with Ethereum to the app")
    pub statement: String,
    /// Server-issued one-time value
    pub nonce: String,
    pub domain: String,
    /// Platform origin URL
    pub uri: String,
}

/// Inputs for the on-chain token creation step
#[derive(Debug, Clone)]
pub struct TokenDeployment {
    /// Factory contract (EVM) or fee-collector address (Solana)
    pub factory_address: String,
    pub token_name: String,
    pub token_symbol: String,
    /// Hosted metadata document; attached on-chain on Solana
    pub metadata_url: Option<String>,
    /// Creation fee in the chain's smallest unit, as a string
    pub creation_fee: String,
}

/// Outcome of a confirmed token creation transaction
#[derive(Debug, Clone)]
pub struct TokenDeploymentResult {
    pub tx_hash: String,
    /// Mint address of the created token; only known up front on Solana
    pub token_address: Option<String>,
}

/// Capability set shared by the EVM and Solana wallet variants
#[async_trait]
pub trait WalletAdapter {
    /// Signing context derived at construction
    fn config(&self) -> &WalletConfig;

    /// Build the network's sign-in message and sign it with the held key
    async fn sign_message(&self, params: &SignMessageParams) -> SdkResult<String>;

    /// Create a token on-chain and wait for confirmation
    async fn create_token(&self, deployment: &TokenDeployment) -> SdkResult<TokenDeploymentResult>;

    /// Transfer native currency to an address, returning the tx hash
    async fn deposit(&self, to: &str, amount: &str) -> SdkResult<String>;

    /// Transfer a fungible token to an address, returning the tx hash
    async fn deposit_token(
        &self,
        to: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String>;

    /// Current ERC-20 allowance granted to a spender, in base units.
    /// Always zero on Solana, which has no allowance concept here.
    async fn allowance(&self, spender: &str, token_address: &str) -> SdkResult<u128>;

    /// Approve a spender for an amount. A no-op on Solana.
    async fn approve(
        &self,
        spender: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String>;
}

/// Wallet variant selected once at SDK construction
#[derive(Debug)]
pub enum Wallet {
    Evm(EvmWallet),
    Solana(SolanaWallet),
}

impl Wallet {
    pub fn evm(options: EvmWalletOptions) -> SdkResult<Self> {
        Ok(Wallet::Evm(EvmWallet::new(options)?))
    }

    pub fn solana(options: SolanaWalletOptions) -> SdkResult<Self> {
        Ok(Wallet::Solana(SolanaWallet::new(options)?))
    }

    fn inner(&self) -> &dyn WalletAdapter {
        match self {
            Wallet::Evm(wallet) => wallet,
            Wallet::Solana(wallet) => wallet,
        }
    }
}

#[async_trait]
impl WalletAdapter for Wallet {
    fn config(&self) -> &WalletConfig {
        self.inner().config()
    }

    async fn sign_message(&self, params: &SignMessageParams) -> SdkResult<String> {
        self.inner().sign_message(params).await
    }

    async fn create_token(&self, deployment: &TokenDeployment) -> SdkResult<TokenDeploymentResult> {
        self.inner().create_token(deployment).await
    }

    async fn deposit(&self, to: &str, amount: &str) -> SdkResult<String> {
        self.inner().deposit(to, amount).await
    }

    async fn deposit_token(
        &self,
        to: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String> {
        self.inner()
            .deposit_token(to, amount, token_address, decimals)
            .await
    }

    async fn allowance(&self, spender: &str, token_address: &str) -> SdkResult<u128> {
        self.inner().allowance(spender, token_address).await
    }

    async fn approve(
        &self,
        spender: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String> {
        self.inner()
            .approve(spender, amount, token_address, decimals)
            .await
    }
}
