//! Wire types for the Launchpad platform REST API

use serde::{Deserialize, Serialize};

/// Result of the server liveness probe
///
/// Deliberately not an error: callers branch on `reachable` before
/// committing to a full request sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub reachable: bool,
    pub status_code: Option<u16>,
}

/// Response of `POST /auth-nonce`
#[derive(Debug, Clone, Deserialize)]
pub struct NonceResponse {
    pub nonce: u64,
}

/// Response of `GET /app-config`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub quick_buy_default_usd_amount: Option<String>,
    #[serde(default)]
    pub quick_buy_default_slippage: Option<String>,
    #[serde(default)]
    pub bonding_curve_usd_target: Option<String>,
    #[serde(default)]
    pub winner_milestone_usd_target: Option<String>,
}

/// Response of `POST /token-metadata`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataUploadResponse {
    /// URL of the hosted metadata document, passed to the token contract
    #[serde(alias = "url")]
    pub metadata_url: String,
}

/// Response of `POST /tokens`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
}

/// One token as listed by `GET /tokens`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub blockchain_key: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One balance entry from `GET /accounts`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub token_id: String,
    pub balance: String,
    #[serde(default)]
    pub locked: Option<String>,
    #[serde(default)]
    pub blockchain_key: Option<String>,
}

/// One deposit entry from `GET /deposits`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    #[serde(default)]
    pub uid: Option<String>,
    pub user_address: String,
    pub token_id: String,
    pub amount: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Identifier of an accepted withdrawal request
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalUid {
    pub uid: String,
}

/// Response of `POST /withdrawals`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResponse {
    pub message: String,
    pub withdrawal_uid: WithdrawalUid,
}

/// One withdrawal entry from `GET /withdrawals`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecord {
    #[serde(default)]
    pub uid: Option<String>,
    pub token_id: String,
    pub user_address: String,
    pub request_amount: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One market entry from `GET /markets`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    #[serde(default)]
    pub market_id: Option<String>,
    pub base_token_id: String,
    pub quote_token_id: String,
    #[serde(default)]
    pub blockchain_key: Option<String>,
    #[serde(default)]
    pub last_price: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One trade entry from `GET /trades`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(default)]
    pub trade_id: Option<String>,
    pub base_token_id: String,
    pub quote_token_id: String,
    pub amount: String,
    pub price: String,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub user_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry from `GET /transactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub user_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `POST /orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub message: String,
    pub order_uid: String,
}

/// Response of `POST /market-{side}-{marketType}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}
