//! Client SDK for the Launchpad token trading platform
//!
//! Authenticates an EVM or Solana wallet against the platform with a
//! signed sign-in message, then exposes the platform's market, token,
//! balance, deposit, withdrawal, and order operations behind one facade.
//!
//! ```no_run
//! use launchpad_core::PageQuery;
//! use launchpad_sdk::{LaunchpadSdk, SdkOptions};
//!
//! # async fn run() -> launchpad_core::SdkResult<()> {
//! let sdk = LaunchpadSdk::connect(SdkOptions::evm(
//!     "https://api.launchpad.example.com",
//!     "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
//!     97,
//!     "https://bsc-testnet.example-rpc.com",
//! ))
//! .await?;
//!
//! let tokens = sdk.list_tokens(&PageQuery::new(1, 25)).await?;
//! println!("{} tokens listed", tokens.len());
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod sdk;

pub use options::SdkOptions;
pub use sdk::{DepositReceipt, LaunchpadSdk};

pub use launchpad_api::{
    AccountBalance, AppConfig, DepositRecord, EstimateResponse, MarketRecord, OrderResponse,
    PlatformClient, ServerStatus, TokenRecord, TokenUploadResponse, TradeRecord,
    TransactionRecord, WithdrawalRecord, WithdrawalResponse,
};
pub use launchpad_core::{
    filter_blockchain_network, future_epoch_in_minutes, DepositParams, DepositQuery,
    EstimateQuery, MarketEstimateKind, MarketQuery, NetworkInfo, NetworkType, OrderRequest,
    OrderSide, PageQuery, SdkError, SdkResult, TokenCreationParams, TradeQuery, WithdrawalQuery,
    WithdrawalRequest,
};
pub use launchpad_wallet::{Cluster, EvmWalletOptions, SolanaWalletOptions, Wallet, WalletAdapter};
