//! Core types for the Launchpad client SDK
//!
//! This crate defines the shared data structures used across the SDK:
//! network records and selection, user-facing parameters with their local
//! validation, and the SDK-wide error taxonomy.

pub mod constants;
pub mod error;
pub mod network;
pub mod params;
pub mod time;

pub use constants::{
    default_sign_in_statement, DEFAULT_BASE_ORIGIN, DEFAULT_DOMAIN, DEFAULT_FEATURE,
    DEFAULT_TOKEN_DECIMALS, DEFAULT_TOKEN_SUPPLY, DEFAULT_VERSION,
};
pub use error::{SdkError, SdkResult};
pub use network::{filter_blockchain_network, NetworkInfo, NetworkType};
pub use params::{
    parse_positive_amount, DepositParams, DepositQuery, EstimateQuery, MarketEstimateKind,
    MarketQuery, OrderRequest, OrderSide, PageQuery, TokenCreationParams, TradeQuery,
    WithdrawalQuery, WithdrawalRequest,
};
pub use time::future_epoch_in_minutes;
