//! User-supplied parameters and their local validation
//!
//! Every write operation validates its parameters here before a single
//! network or RPC call is issued; a failed validation never reaches the
//! wire.

use crate::error::{SdkError, SdkResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Parse a user-supplied decimal amount string, rejecting anything that is
/// not a finite number greater than zero.
pub fn parse_positive_amount(amount: &str) -> SdkResult<f64> {
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| SdkError::validation(format!("Invalid amount: {}", amount)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(SdkError::validation(format!(
            "Amount must be greater than zero, got {}",
            amount
        )));
    }

    Ok(value)
}

fn require_field(value: &str, name: &str) -> SdkResult<()> {
    if value.trim().is_empty() {
        return Err(SdkError::validation(format!("{} is required", name)));
    }
    Ok(())
}

fn require_matching_network(blockchain_key: &str, active_key: &str) -> SdkResult<()> {
    if blockchain_key != active_key {
        return Err(SdkError::validation(format!(
            "Blockchain key {} does not match the active network {}",
            blockchain_key, active_key
        )));
    }
    Ok(())
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// Quote dimension for a market estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketEstimateKind {
    /// Estimate the amount received for a given price
    Price,
    /// Estimate the price for a given amount
    Amount,
}

impl MarketEstimateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketEstimateKind::Price => "price",
            MarketEstimateKind::Amount => "amount",
        }
    }
}

/// Everything needed to create and register a token
///
/// Flows through metadata upload → deploy → register without mutation beyond
/// the transaction hash appended after deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreationParams {
    pub token_name: String,
    pub token_symbol: String,
    #[serde(default)]
    pub token_description: Option<String>,
    /// Base64-encoded token image, optionally with a data-URI prefix
    pub token_image: String,
    #[serde(default)]
    pub token_website: Option<String>,
    #[serde(default)]
    pub token_twitter: Option<String>,
    #[serde(default)]
    pub token_telegram: Option<String>,
    #[serde(default)]
    pub token_discord: Option<String>,
    /// Token the new market is quoted against (e.g. "erc20:0x..")
    pub quote_token_id: String,
    #[serde(default)]
    pub initial_buy_price: Option<String>,
    pub blockchain_key: String,
    /// Deployment transaction hash, attached after the on-chain step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl TokenCreationParams {
    pub fn validate(&self, active_key: &str) -> SdkResult<()> {
        require_field(&self.token_name, "tokenName")?;
        require_field(&self.token_symbol, "tokenSymbol")?;
        require_field(&self.token_image, "tokenImage")?;
        require_field(&self.quote_token_id, "quoteTokenId")?;
        require_matching_network(&self.blockchain_key, active_key)
    }
}

/// Parameters for a native-currency or token deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositParams {
    /// Decimal amount in display units (e.g. "0.001")
    pub amount: String,
    pub blockchain_key: String,
    /// Token identifier (e.g. "slip44:714" for native, "erc20:0x..")
    pub token_id: String,
}

impl DepositParams {
    pub fn validate(&self, active_key: &str) -> SdkResult<()> {
        parse_positive_amount(&self.amount)?;
        require_field(&self.token_id, "tokenId")?;
        require_matching_network(&self.blockchain_key, active_key)
    }
}

/// Body of `POST /withdrawals`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub token_id: String,
    pub user_address: String,
    /// Decimal amount in display units
    pub request_amount: String,
}

impl WithdrawalRequest {
    pub fn validate(&self) -> SdkResult<()> {
        parse_positive_amount(&self.request_amount)?;
        require_field(&self.token_id, "tokenId")?;
        require_field(&self.user_address, "userAddress")
    }
}

/// Body of `POST /orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub base_token_id: String,
    pub quote_token_id: String,
    /// Decimal amount in display units
    pub amount: String,
    pub price: String,
    pub slippage: String,
    /// Unix timestamp after which the order is void
    pub deadline: i64,
    pub blockchain_key: String,
    pub order_type: OrderSide,
}

impl OrderRequest {
    pub fn validate(&self, active_key: &str) -> SdkResult<()> {
        parse_positive_amount(&self.amount)?;
        require_field(&self.base_token_id, "baseTokenId")?;
        require_field(&self.quote_token_id, "quoteTokenId")?;
        require_matching_network(&self.blockchain_key, active_key)?;

        if self.deadline <= Utc::now().timestamp() {
            return Err(SdkError::validation(format!(
                "Order deadline {} is in the past",
                self.deadline
            )));
        }

        Ok(())
    }
}

/// Query for `POST /market-{side}-{marketType}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateQuery {
    pub base_token_id: String,
    pub quote_token_id: String,
    pub side: OrderSide,
    pub market_type: MarketEstimateKind,
    pub amount: String,
    pub blockchain_key: String,
}

impl EstimateQuery {
    pub fn validate(&self, active_key: &str) -> SdkResult<()> {
        parse_positive_amount(&self.amount)?;
        require_field(&self.base_token_id, "baseTokenId")?;
        require_field(&self.quote_token_id, "quoteTokenId")?;
        require_matching_network(&self.blockchain_key, active_key)
    }
}

/// Plain page/limit pagination
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Query for `GET /deposits`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub blockchain_key: Option<String>,
    pub user_address: Option<String>,
}

/// Query for `GET /withdrawals`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub user_address: Option<String>,
}

/// Query for `GET /markets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Server-side sort key (e.g. "creationTimeAsc")
    pub order_by: Option<String>,
    pub blockchain_key: Option<String>,
}

/// Query for `GET /trades` and `GET /transactions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub blockchain_key: Option<String>,
    pub user_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::future_epoch_in_minutes;

    #[test]
    fn test_parse_positive_amount() {
        assert!(parse_positive_amount("0.001").is_ok());
        assert!(parse_positive_amount(" 1 ").is_ok());
        assert!(parse_positive_amount("0").is_err());
        assert!(parse_positive_amount("-1").is_err());
        assert!(parse_positive_amount("NaN").is_err());
        assert!(parse_positive_amount("abc").is_err());
        assert!(parse_positive_amount("").is_err());
    }

    fn deposit(amount: &str) -> DepositParams {
        DepositParams {
            amount: amount.to_string(),
            blockchain_key: "eip155:97".to_string(),
            token_id: "slip44:714".to_string(),
        }
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        assert!(matches!(
            deposit("0").validate("eip155:97"),
            Err(SdkError::Validation(_))
        ));
        assert!(matches!(
            deposit("-0.5").validate("eip155:97"),
            Err(SdkError::Validation(_))
        ));
        assert!(deposit("0.001").validate("eip155:97").is_ok());
    }

    #[test]
    fn test_deposit_rejects_mismatched_network() {
        assert!(matches!(
            deposit("1").validate("solana:devnet"),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_order_rejects_expired_deadline() {
        let mut order = OrderRequest {
            base_token_id: "erc20:0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567".to_string(),
            quote_token_id: "erc20:0xCf4E54700156e74918EaF77A9ab8C050C8b05890".to_string(),
            amount: "17411.608737".to_string(),
            price: "0.1".to_string(),
            slippage: "1".to_string(),
            deadline: 1_600_000_000,
            blockchain_key: "eip155:97".to_string(),
            order_type: OrderSide::Buy,
        };
        assert!(matches!(
            order.validate("eip155:97"),
            Err(SdkError::Validation(_))
        ));

        order.deadline = future_epoch_in_minutes(10);
        assert!(order.validate("eip155:97").is_ok());
    }

    #[test]
    fn test_withdrawal_requires_token_id() {
        let request = WithdrawalRequest {
            token_id: String::new(),
            user_address: "0x97F3222Bb839D54cf033b5393C700EC28ECc14cD".to_string(),
            request_amount: "0.2".to_string(),
        };
        assert!(matches!(
            request.validate(),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_token_creation_requires_image() {
        let params = TokenCreationParams {
            token_name: "Test Fun Token".to_string(),
            token_symbol: "TFK".to_string(),
            token_description: None,
            token_image: String::new(),
            token_website: None,
            token_twitter: None,
            token_telegram: None,
            token_discord: None,
            quote_token_id: "erc20:0xCf4E54700156e74918EaF77A9ab8C050C8b05890".to_string(),
            initial_buy_price: None,
            blockchain_key: "eip155:97".to_string(),
            tx_hash: None,
        };
        assert!(matches!(
            params.validate("eip155:97"),
            Err(SdkError::Validation(_))
        ));
    }
}
