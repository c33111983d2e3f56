//! Launchpad platform API client
//!
//! One method per REST resource. Each method performs exactly one HTTP
//! call, maps transport failures to [`SdkError::Network`], non-2xx
//! responses to [`SdkError::Api`], and decode failures to
//! [`SdkError::Parse`]. No retries, no backoff; a failed call surfaces
//! immediately.

use crate::image::validate_base64_image;
use crate::types::{
    AccountBalance, AppConfig, DepositRecord, EstimateResponse, MarketRecord,
    MetadataUploadResponse, NonceResponse, OrderResponse, ServerStatus, TokenRecord,
    TokenUploadResponse, TradeRecord, TransactionRecord, WithdrawalRecord, WithdrawalResponse,
};
use launchpad_core::{
    DepositQuery, EstimateQuery, MarketQuery, NetworkInfo, NetworkType, OrderRequest, PageQuery,
    SdkError, SdkResult, TokenCreationParams, TradeQuery, WithdrawalQuery, WithdrawalRequest,
    DEFAULT_FEATURE, DEFAULT_VERSION,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Timeout applied to every platform request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Short timeout for the liveness probe
const STATUS_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Launchpad platform REST API
///
/// Each SDK instance owns its own client; two clients share no state. The
/// signature registered with [`PlatformClient::set_signature_auth`] is sent
/// as the `Authorization` header on all subsequent calls.
#[derive(Clone)]
pub struct PlatformClient {
    client: Client,
    base_url: String,
    signature: Option<String>,
}

impl PlatformClient {
    /// Create a new client for the given platform server URL
    pub fn new(server_url: &str) -> SdkResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SdkError::config(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(client, server_url)
    }

    /// Create a client with an explicitly constructed HTTP client
    pub fn with_client(client: Client, server_url: &str) -> SdkResult<Self> {
        Ok(Self {
            client,
            base_url: api_base(server_url)?,
            signature: None,
        })
    }

    /// Get the derived API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register the wallet signature sent as `Authorization` on all
    /// subsequent calls from this client
    pub fn set_signature_auth(&mut self, signature: impl Into<String>) {
        self.signature = Some(signature.into());
    }

    /// Get the registered signature, if any
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Probe a server for liveness.
    ///
    /// Returns a structured up/down result instead of erroring so callers
    /// can branch before committing to a full request sequence.
    #[instrument(skip(self))]
    pub async fn check_status(&self, url: &str) -> ServerStatus {
        debug!("Probing server status: {}", url);

        match self
            .client
            .get(url)
            .timeout(STATUS_PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => ServerStatus {
                reachable: true,
                status_code: Some(response.status().as_u16()),
            },
            Err(_) => ServerStatus {
                reachable: false,
                status_code: None,
            },
        }
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Request a sign-in nonce for a wallet address
    #[instrument(skip(self))]
    pub async fn nonce(&self, address: &str, network: NetworkType) -> SdkResult<u64> {
        let body = serde_json::json!({
            "userAddress": address,
            "blockchainType": network.as_str(),
        });

        let response: NonceResponse = self.post_json("/auth-nonce", &body, "nonce").await?;
        Ok(response.nonce)
    }

    /// Validate the server-side session established by the signature
    #[instrument(skip(self))]
    pub async fn auth_check(&self) -> SdkResult<()> {
        let url = format!("{}/auth-check", self.base_url);

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SdkError::network(format!("Failed to check auth: {}", e)))?;

        if response.status().as_u16() == 401 {
            return Err(SdkError::auth("Signature rejected by the platform"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::api(format!(
                "Launchpad API error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Platform configuration
    // ========================================================================

    /// List the blockchain networks registered on the platform
    #[instrument(skip(self))]
    pub async fn blockchains(&self) -> SdkResult<Vec<NetworkInfo>> {
        self.get_json("/blockchains", "blockchains").await
    }

    /// Fetch the platform application config
    #[instrument(skip(self))]
    pub async fn app_config(&self) -> SdkResult<AppConfig> {
        self.get_json("/app-config", "app config").await
    }

    // ========================================================================
    // Token creation
    // ========================================================================

    /// Upload token metadata, returning the hosted metadata URL.
    ///
    /// The embedded base64 image is decoded and type-checked locally; an
    /// invalid image never reaches the network.
    #[instrument(skip(self, params))]
    pub async fn upload_metadata(&self, params: &TokenCreationParams) -> SdkResult<String> {
        validate_base64_image(&params.token_image)?;

        let response: MetadataUploadResponse = self
            .post_json("/token-metadata", params, "token metadata")
            .await?;
        Ok(response.metadata_url)
    }

    /// Register a deployed token with the platform
    #[instrument(skip(self, params))]
    pub async fn upload_token_data(
        &self,
        params: &TokenCreationParams,
    ) -> SdkResult<TokenUploadResponse> {
        validate_base64_image(&params.token_image)?;

        self.post_json("/tokens", params, "token registration").await
    }

    /// List tokens registered on the platform
    #[instrument(skip(self))]
    pub async fn list_tokens(&self, query: &PageQuery) -> SdkResult<Vec<TokenRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
        ]);
        self.get_json(&format!("/tokens{}", qs), "tokens").await
    }

    // ========================================================================
    // Balances, deposits, withdrawals
    // ========================================================================

    /// Fetch the authenticated user's platform balances
    #[instrument(skip(self))]
    pub async fn account_balances(&self, query: &PageQuery) -> SdkResult<Vec<AccountBalance>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
        ]);
        self.get_json(&format!("/accounts{}", qs), "account balances")
            .await
    }

    /// List deposits indexed by the platform
    #[instrument(skip(self))]
    pub async fn list_deposits(&self, query: &DepositQuery) -> SdkResult<Vec<DepositRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
            ("blockchainKey", query.blockchain_key.clone()),
            ("userAddress", query.user_address.clone()),
        ]);
        self.get_json(&format!("/deposits{}", qs), "deposits").await
    }

    /// Submit a withdrawal request
    #[instrument(skip(self, request))]
    pub async fn create_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> SdkResult<WithdrawalResponse> {
        self.post_json("/withdrawals", request, "withdrawal").await
    }

    /// List withdrawal requests
    #[instrument(skip(self))]
    pub async fn list_withdrawals(
        &self,
        query: &WithdrawalQuery,
    ) -> SdkResult<Vec<WithdrawalRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
            ("userAddress", query.user_address.clone()),
        ]);
        self.get_json(&format!("/withdrawals{}", qs), "withdrawals")
            .await
    }

    // ========================================================================
    // Markets, trades, orders
    // ========================================================================

    /// List markets on the platform
    #[instrument(skip(self))]
    pub async fn list_markets(&self, query: &MarketQuery) -> SdkResult<Vec<MarketRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
            ("orderBy", query.order_by.clone()),
            ("blockchainKey", query.blockchain_key.clone()),
        ]);
        self.get_json(&format!("/markets{}", qs), "markets").await
    }

    /// List on-chain transactions indexed by the platform
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, query: &TradeQuery) -> SdkResult<Vec<TransactionRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
            ("blockchainKey", query.blockchain_key.clone()),
            ("userAddress", query.user_address.clone()),
        ]);
        self.get_json(&format!("/transactions{}", qs), "transactions")
            .await
    }

    /// List trade history
    #[instrument(skip(self))]
    pub async fn list_trades(&self, query: &TradeQuery) -> SdkResult<Vec<TradeRecord>> {
        let qs = build_query(&[
            ("page", query.page.map(|v| v.to_string())),
            ("limit", query.limit.map(|v| v.to_string())),
            ("blockchainKey", query.blockchain_key.clone()),
            ("userAddress", query.user_address.clone()),
        ]);
        self.get_json(&format!("/trades{}", qs), "trades").await
    }

    /// Submit an order
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: &OrderRequest) -> SdkResult<OrderResponse> {
        self.post_json("/orders", request, "order").await
    }

    /// Estimate the price or amount for a prospective order
    #[instrument(skip(self))]
    pub async fn estimate_market(&self, query: &EstimateQuery) -> SdkResult<EstimateResponse> {
        let path = estimate_path(query);
        self.post_json(&path, query, "market estimate").await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.signature {
            Some(signature) => builder.header(reqwest::header::AUTHORIZATION, signature),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> SdkResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SdkError::network(format!("Failed to fetch {}: {}", what, e)))?;

        decode_response(response, what).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        what: &str,
    ) -> SdkResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .request(self.client.post(&url).json(body))
            .send()
            .await
            .map_err(|e| SdkError::network(format!("Failed to submit {}: {}", what, e)))?;

        decode_response(response, what).await
    }
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.signature.is_some())
            .finish()
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> SdkResult<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SdkError::api(format!(
            "Launchpad API error ({}): {}",
            status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| SdkError::parse(format!("Failed to parse {} response: {}", what, e)))
}

/// Derive the API base URL from a platform server URL
fn api_base(server_url: &str) -> SdkResult<String> {
    let parsed = Url::parse(server_url)
        .map_err(|e| SdkError::config(format!("Invalid server URL {}: {}", server_url, e)))?;

    if parsed.host_str().is_none() {
        return Err(SdkError::config(format!(
            "Server URL {} has no host",
            server_url
        )));
    }

    Ok(format!(
        "{}{}{}",
        server_url.trim_end_matches('/'),
        DEFAULT_FEATURE,
        DEFAULT_VERSION
    ))
}

/// Path of the market estimate endpoint, e.g. `/market-buy-price`
fn estimate_path(query: &EstimateQuery) -> String {
    format!(
        "/market-{}-{}",
        query.side.as_str(),
        query.market_type.as_str()
    )
}

/// Build a query string from optional parameters, skipping absent ones
fn build_query(pairs: &[(&str, Option<String>)]) -> String {
    let params: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
        .collect();

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_core::{MarketEstimateKind, OrderSide};

    #[test]
    fn test_api_base_appends_feature_and_version() {
        assert_eq!(
            api_base("https://api.launchpad.example.com").unwrap(),
            "https://api.launchpad.example.com/api/v1"
        );
        assert_eq!(
            api_base("https://api.launchpad.example.com/").unwrap(),
            "https://api.launchpad.example.com/api/v1"
        );
    }

    #[test]
    fn test_api_base_rejects_invalid_url() {
        assert!(matches!(api_base("not a url"), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_build_query_skips_absent_params() {
        assert_eq!(build_query(&[("page", None), ("limit", None)]), "");
        assert_eq!(
            build_query(&[
                ("page", Some("1".to_string())),
                ("cursor", None),
                ("limit", Some("25".to_string())),
            ]),
            "?page=1&limit=25"
        );
    }

    #[test]
    fn test_estimate_path() {
        let query = EstimateQuery {
            base_token_id: "erc20:0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567".to_string(),
            quote_token_id: "erc20:0xCf4E54700156e74918EaF77A9ab8C050C8b05890".to_string(),
            side: OrderSide::Buy,
            market_type: MarketEstimateKind::Price,
            amount: "0.1".to_string(),
            blockchain_key: "eip155:97".to_string(),
        };
        assert_eq!(estimate_path(&query), "/market-buy-price");
    }

    #[test]
    fn test_signature_auth_is_stored() {
        let mut client = PlatformClient::new("https://api.launchpad.example.com").unwrap();
        assert!(client.signature().is_none());

        client.set_signature_auth("0xdeadbeef");
        assert_eq!(client.signature(), Some("0xdeadbeef"));
    }
}
