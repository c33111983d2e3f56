//! Launchpad platform REST client
//!
//! Wraps the fixed set of platform endpoints behind one method per
//! resource, with the wallet signature attached as the `Authorization`
//! header once the sign-in flow completes.

pub mod client;
pub mod image;
pub mod types;

pub use client::PlatformClient;
pub use image::{validate_base64_image, DecodedImage, MAX_IMAGE_BYTES};
pub use types::{
    AccountBalance, AppConfig, DepositRecord, EstimateResponse, MarketRecord,
    MetadataUploadResponse, NonceResponse, OrderResponse, ServerStatus, TokenRecord,
    TokenUploadResponse, TradeRecord, TransactionRecord, WithdrawalRecord, WithdrawalResponse,
    WithdrawalUid,
};
