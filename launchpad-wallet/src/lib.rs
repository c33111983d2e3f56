//! Wallet adapters for the Launchpad SDK
//!
//! One adapter per supported network family. [`EvmWallet`] signs with a
//! secp256k1 key over an EVM JSON-RPC endpoint; [`SolanaWallet`] signs with
//! an ed25519 keypair against a Solana cluster. The [`Wallet`] enum unifies
//! them behind [`WalletAdapter`] for the SDK facade.

pub mod adapter;
pub mod evm;
pub mod message;
pub mod solana;

pub use adapter::{
    SignMessageParams, TokenDeployment, TokenDeploymentResult, Wallet, WalletAdapter, WalletConfig,
};
pub use evm::{EvmWallet, EvmWalletOptions};
pub use message::{siwe_message, siws_message, SignInFields};
pub use solana::{Cluster, SolanaWallet, SolanaWalletOptions};
