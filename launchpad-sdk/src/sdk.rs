//! SDK facade
//!
//! Owns one wallet, one platform client, and the cached network record, and
//! sequences the multi-step flows (sign-in, token creation, deposits) the
//! platform expects.

use launchpad_api::{
    AccountBalance, AppConfig, DepositRecord, EstimateResponse, MarketRecord, OrderResponse,
    PlatformClient, ServerStatus, TokenRecord, TokenUploadResponse, TradeRecord,
    TransactionRecord, WithdrawalRecord, WithdrawalResponse,
};
use launchpad_core::{
    default_sign_in_statement, filter_blockchain_network, DepositParams, DepositQuery,
    EstimateQuery, MarketQuery, NetworkInfo, NetworkType, OrderRequest, PageQuery, SdkError,
    SdkResult, TokenCreationParams, TradeQuery, WithdrawalQuery, WithdrawalRequest,
};
use launchpad_wallet::{SignMessageParams, TokenDeployment, Wallet, WalletAdapter};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::options::SdkOptions;

/// Message returned once a deposit transaction is confirmed on-chain
const DEPOSIT_SUCCESS_MESSAGE: &str = "user deposited success";

/// Outcome of a confirmed deposit transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    pub message: String,
    pub tx_hash: String,
}

/// Client SDK for the Launchpad platform
///
/// Construct with [`LaunchpadSdk::connect`], which completes the wallet
/// sign-in handshake. The blockchain network record is fetched lazily on the
/// first operation that needs it and cached until
/// [`LaunchpadSdk::refresh_blockchain_data`]. Two instances share nothing.
#[derive(Debug)]
pub struct LaunchpadSdk {
    client: PlatformClient,
    wallet: Wallet,
    network: RwLock<Option<NetworkInfo>>,
    server_url: String,
}

impl LaunchpadSdk {
    /// Connect to the platform: build the wallet, probe the server, and
    /// complete the nonce/sign/verify handshake.
    #[instrument(skip(options), fields(network = %options.network))]
    pub async fn connect(options: SdkOptions) -> SdkResult<Self> {
        let server_url = options.server_url()?.to_string();
        let wallet = options.build_wallet()?;
        let mut client = PlatformClient::new(&server_url)?;

        let status = client.check_status(&server_url).await;
        if !status.reachable {
            return Err(SdkError::network(format!(
                "Platform server {} is unreachable",
                server_url
            )));
        }

        let signature = sign_in(&client, &wallet).await?;
        client.set_signature_auth(signature);
        client.auth_check().await?;

        let config = wallet.config();
        info!("Signed in as {} ({})", config.address, config.network);

        Ok(Self {
            client,
            wallet,
            network: RwLock::new(None),
            server_url,
        })
    }

    /// Re-run the nonce/sign/verify handshake, replacing the session
    /// signature. Call this when the server-side session has expired.
    pub async fn reauthenticate(&mut self) -> SdkResult<()> {
        let signature = sign_in(&self.client, &self.wallet).await?;
        self.client.set_signature_auth(signature);
        self.client.auth_check().await?;
        info!("Session re-established for {}", self.wallet.config().address);
        Ok(())
    }

    /// Wallet address in the chain's native encoding
    pub fn address(&self) -> &str {
        &self.wallet.config().address
    }

    /// Session signature sent as `Authorization` on platform calls
    pub fn signature(&self) -> Option<&str> {
        self.client.signature()
    }

    /// The network record this SDK instance operates on, fetched on first
    /// use and cached afterwards
    pub async fn blockchain_data(&self) -> SdkResult<NetworkInfo> {
        self.active_network().await
    }

    /// Re-fetch the network list and replace the cached record
    pub async fn refresh_blockchain_data(&self) -> SdkResult<NetworkInfo> {
        let network = select_network(&self.client, &self.wallet).await?;
        debug!("Active network: {}", network.key);
        *self.network.write().await = Some(network.clone());
        Ok(network)
    }

    /// Probe the platform server for liveness
    pub async fn check_server_status(&self) -> ServerStatus {
        self.client.check_status(&self.server_url).await
    }

    // ========================================================================
    // Token creation
    // ========================================================================

    /// Deploy a token on-chain and register it with the platform.
    ///
    /// On EVM the metadata document is uploaded first and its URL handed to
    /// the factory contract; on Solana the mint transaction runs first and
    /// carries the metadata on-chain. Either way the confirmed transaction
    /// hash is attached before registration. A partial failure is surfaced
    /// as-is; there is no compensation for steps that already ran.
    #[instrument(skip(self, params), fields(symbol = %params.token_symbol))]
    pub async fn deploy_and_request_create_token(
        &self,
        mut params: TokenCreationParams,
    ) -> SdkResult<TokenUploadResponse> {
        let network = self.active_network().await?;
        params.validate(&network.key)?;

        let metadata_url = match self.wallet.config().network {
            NetworkType::Evm => Some(self.client.upload_metadata(&params).await?),
            NetworkType::Solana => None,
        };

        let deployment = TokenDeployment {
            factory_address: network.token_factory_contract_address.clone(),
            token_name: params.token_name.clone(),
            token_symbol: params.token_symbol.clone(),
            metadata_url,
            creation_fee: network.token_creation_fee.clone(),
        };

        let result = self.wallet.create_token(&deployment).await?;
        info!("Token deployed: {}", result.tx_hash);

        params.tx_hash = Some(result.tx_hash);
        self.client.upload_token_data(&params).await
    }

    /// List tokens registered on the platform
    pub async fn list_tokens(&self, query: &PageQuery) -> SdkResult<Vec<TokenRecord>> {
        self.client.list_tokens(query).await
    }

    // ========================================================================
    // Balances, deposits, withdrawals
    // ========================================================================

    /// Fetch the signed-in user's platform balances
    pub async fn account_balances(&self, query: &PageQuery) -> SdkResult<Vec<AccountBalance>> {
        self.client.account_balances(query).await
    }

    /// Deposit native currency to the platform deposit address.
    ///
    /// The transaction is signed and confirmed on-chain; the platform picks
    /// it up through its indexer, so no API call follows.
    #[instrument(skip(self, params), fields(amount = %params.amount))]
    pub async fn create_deposit(&self, params: &DepositParams) -> SdkResult<DepositReceipt> {
        let network = self.active_network().await?;
        params.validate(&network.key)?;

        let tx_hash = self
            .wallet
            .deposit(&network.deposit_address, &params.amount)
            .await?;
        info!("Deposit confirmed: {}", tx_hash);

        Ok(DepositReceipt {
            message: DEPOSIT_SUCCESS_MESSAGE.to_string(),
            tx_hash,
        })
    }

    /// Deposit a fungible token to the platform deposit address. The token
    /// address is taken from the namespaced `token_id`; `decimals` is the
    /// token's on-chain precision.
    #[instrument(skip(self, params), fields(token = %params.token_id))]
    pub async fn create_deposit_token(
        &self,
        params: &DepositParams,
        decimals: u8,
    ) -> SdkResult<DepositReceipt> {
        let network = self.active_network().await?;
        params.validate(&network.key)?;
        let token_address = token_address_from_id(&params.token_id)?;

        let tx_hash = self
            .wallet
            .deposit_token(
                &network.deposit_address,
                &params.amount,
                &token_address,
                decimals,
            )
            .await?;
        info!("Token deposit confirmed: {}", tx_hash);

        Ok(DepositReceipt {
            message: DEPOSIT_SUCCESS_MESSAGE.to_string(),
            tx_hash,
        })
    }

    /// List deposits indexed by the platform
    pub async fn deposits(&self, query: &DepositQuery) -> SdkResult<Vec<DepositRecord>> {
        self.client.list_deposits(query).await
    }

    /// Submit a withdrawal request for platform balance
    #[instrument(skip(self, request), fields(token = %request.token_id))]
    pub async fn create_withdraw(
        &self,
        request: &WithdrawalRequest,
    ) -> SdkResult<WithdrawalResponse> {
        request.validate()?;
        self.client.create_withdrawal(request).await
    }

    /// List withdrawal requests
    pub async fn withdrawals(&self, query: &WithdrawalQuery) -> SdkResult<Vec<WithdrawalRecord>> {
        self.client.list_withdrawals(query).await
    }

    // ========================================================================
    // Markets, trades, orders
    // ========================================================================

    /// List markets on the platform
    pub async fn market_list(&self, query: &MarketQuery) -> SdkResult<Vec<MarketRecord>> {
        self.client.list_markets(query).await
    }

    /// List on-chain transactions indexed by the platform
    pub async fn transactions(&self, query: &TradeQuery) -> SdkResult<Vec<TransactionRecord>> {
        self.client.list_transactions(query).await
    }

    /// List trade history
    pub async fn trade_history(&self, query: &TradeQuery) -> SdkResult<Vec<TradeRecord>> {
        self.client.list_trades(query).await
    }

    /// Estimate the price or amount for a prospective order
    pub async fn estimate_market(&self, query: &EstimateQuery) -> SdkResult<EstimateResponse> {
        let network = self.active_network().await?;
        query.validate(&network.key)?;
        self.client.estimate_market(query).await
    }

    /// Submit an order against platform balance
    #[instrument(skip(self, request), fields(side = %request.order_type.as_str()))]
    pub async fn create_order(&self, request: &OrderRequest) -> SdkResult<OrderResponse> {
        let network = self.active_network().await?;
        request.validate(&network.key)?;
        self.client.create_order(request).await
    }

    /// Fetch the platform application config
    pub async fn app_config(&self) -> SdkResult<AppConfig> {
        self.client.app_config().await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn active_network(&self) -> SdkResult<NetworkInfo> {
        if let Some(network) = self.network.read().await.clone() {
            return Ok(network);
        }
        self.refresh_blockchain_data().await
    }
}

/// Run the nonce/sign handshake and return the session signature
async fn sign_in(client: &PlatformClient, wallet: &Wallet) -> SdkResult<String> {
    let config = wallet.config();
    let nonce = client.nonce(&config.address, config.network).await?;

    wallet
        .sign_message(&SignMessageParams {
            statement: default_sign_in_statement(config.network).to_string(),
            nonce: nonce.to_string(),
            domain: config.domain.clone(),
            uri: config.origin.clone(),
        })
        .await
}

/// Fetch the network list and select the record matching the wallet
async fn select_network(client: &PlatformClient, wallet: &Wallet) -> SdkResult<NetworkInfo> {
    let config = wallet.config();
    let networks = client.blockchains().await?;

    filter_blockchain_network(&networks, config.network, Some(config.chain_id))
        .cloned()
        .ok_or_else(|| {
            SdkError::not_found(format!(
                "No {} network with chain id {} is registered on the platform",
                config.network, config.chain_id
            ))
        })
}

/// Extract the on-chain token address from a namespaced token id
/// (e.g. "erc20:0x1737..") for the wallet transfer call
fn token_address_from_id(token_id: &str) -> SdkResult<String> {
    match token_id.split_once(':') {
        Some((_, address)) if !address.is_empty() => Ok(address.to_string()),
        _ => Err(SdkError::validation(format!(
            "Token id {} has no address component",
            token_id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_address_from_id() {
        assert_eq!(
            token_address_from_id("erc20:0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567").unwrap(),
            "0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567"
        );
        assert!(matches!(
            token_address_from_id("erc20:"),
            Err(SdkError::Validation(_))
        ));
        assert!(matches!(
            token_address_from_id("no-namespace"),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_deposit_receipt_serializes_camel_case() {
        let receipt = DepositReceipt {
            message: DEPOSIT_SUCCESS_MESSAGE.to_string(),
            tx_hash: "0xabc".to_string(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["message"], "user deposited success");
        assert_eq!(json["txHash"], "0xabc");
    }
}
