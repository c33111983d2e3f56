//! EVM wallet adapter
//!
//! Signs EIP-4361 sign-in messages with a local key and drives the token
//! factory and ERC-20 transfers through an alloy provider attached to the
//! configured RPC endpoint.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::utils::{parse_ether, parse_units};
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use alloy::sol;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use launchpad_core::{NetworkType, SdkError, SdkResult};
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

use crate::adapter::{
    SignMessageParams, TokenDeployment, TokenDeploymentResult, WalletAdapter, WalletConfig,
};
use crate::message::{siwe_message, SignInFields};

sol! {
    #[sol(rpc)]
    contract TokenFactory {
        function getTokenCreationFee() external view returns (uint256);
        function createToken(string memory name, string memory symbol) external payable returns (address);
    }

    #[sol(rpc)]
    contract Erc20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Credentials for constructing an [`EvmWallet`]; every field is required
#[derive(Clone, Default)]
pub struct EvmWalletOptions {
    pub server_url: Option<String>,
    /// Hex private key, with or without a `0x` prefix
    pub private_key: Option<String>,
    pub chain_id: Option<u64>,
    pub rpc_url: Option<String>,
}

/// Wallet adapter for EVM-compatible chains
pub struct EvmWallet {
    signer: PrivateKeySigner,
    address: Address,
    rpc_url: Url,
    config: WalletConfig,
}

impl EvmWallet {
    /// Construct the adapter, failing fast on any missing or malformed
    /// credential. No network or crypto operation runs here.
    pub fn new(options: EvmWalletOptions) -> SdkResult<Self> {
        let server_url = options
            .server_url
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SdkError::config("server URL is required"))?;
        let private_key = options
            .private_key
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SdkError::config("private key is required"))?;
        let chain_id = options
            .chain_id
            .ok_or_else(|| SdkError::config("chain id is required"))?;
        let rpc_url = options
            .rpc_url
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SdkError::config("RPC URL is required"))?;

        let rpc_url = Url::parse(&rpc_url)
            .map_err(|e| SdkError::config(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

        let parsed = Url::parse(&server_url)
            .map_err(|e| SdkError::config(format!("Invalid server URL {}: {}", server_url, e)))?;
        let domain = parsed
            .host_str()
            .ok_or_else(|| SdkError::config(format!("Server URL {} has no host", server_url)))?
            .to_string();
        let origin = parsed.origin().ascii_serialization();

        let key = private_key.strip_prefix("0x").unwrap_or(&private_key);
        let key_bytes = B256::from_str(key)
            .map_err(|e| SdkError::config(format!("Invalid private key format: {}", e)))?;
        let signer = PrivateKeySigner::from_bytes(&key_bytes)
            .map_err(|e| SdkError::config(format!("Failed to create signer: {}", e)))?;

        let address = signer.address();
        info!("Loaded EVM wallet: {}", address);

        Ok(Self {
            signer,
            address,
            rpc_url,
            config: WalletConfig {
                address: address.to_checksum(None),
                domain,
                origin,
                network: NetworkType::Evm,
                chain_id,
            },
        })
    }

    fn provider(&self) -> impl Provider {
        ProviderBuilder::new()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .connect_http(self.rpc_url.clone())
    }
}

#[async_trait]
impl WalletAdapter for EvmWallet {
    fn config(&self) -> &WalletConfig {
        &self.config
    }

    async fn sign_message(&self, params: &SignMessageParams) -> SdkResult<String> {
        let text = siwe_message(&SignInFields {
            domain: params.domain.clone(),
            address: self.config.address.clone(),
            statement: params.statement.clone(),
            uri: params.uri.clone(),
            chain_id: self.config.chain_id.to_string(),
            nonce: params.nonce.clone(),
            issued_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            expiration_time: None,
        });

        let signature = self
            .signer
            .sign_message(text.as_bytes())
            .await
            .map_err(|e| SdkError::wallet(format!("Failed to sign message: {}", e)))?;

        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }

    async fn create_token(&self, deployment: &TokenDeployment) -> SdkResult<TokenDeploymentResult> {
        let factory_address = parse_address(&deployment.factory_address)?;
        let provider = self.provider();
        let factory = TokenFactory::new(factory_address, provider);

        let fee: U256 = factory
            .getTokenCreationFee()
            .call()
            .await
            .map_err(|e| SdkError::chain(format!("Failed to read token creation fee: {}", e)))?;

        debug!("Creating token via factory {} (fee: {})", factory_address, fee);

        let pending = factory
            .createToken(
                deployment.token_name.clone(),
                deployment.token_symbol.clone(),
            )
            .value(fee)
            .send()
            .await
            .map_err(|e| SdkError::chain(format!("Token creation failed: {}", e)))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| SdkError::chain(format!("Token creation not confirmed: {}", e)))?;

        if !receipt.status() {
            return Err(SdkError::chain(format!(
                "Token creation reverted: {}",
                receipt.transaction_hash
            )));
        }

        Ok(TokenDeploymentResult {
            tx_hash: receipt.transaction_hash.to_string(),
            token_address: None,
        })
    }

    async fn deposit(&self, to: &str, amount: &str) -> SdkResult<String> {
        let to = parse_address(to)?;
        let value = parse_ether(amount)
            .map_err(|e| SdkError::validation(format!("Invalid amount {}: {}", amount, e)))?;

        debug!("Depositing {} wei to {}", value, to);

        let tx = TransactionRequest::default().with_to(to).with_value(value);

        let receipt = self
            .provider()
            .send_transaction(tx)
            .await
            .map_err(|e| SdkError::chain(format!("Deposit failed: {}", e)))?
            .get_receipt()
            .await
            .map_err(|e| SdkError::chain(format!("Deposit not confirmed: {}", e)))?;

        if !receipt.status() {
            return Err(SdkError::chain(format!(
                "Deposit reverted: {}",
                receipt.transaction_hash
            )));
        }

        Ok(receipt.transaction_hash.to_string())
    }

    async fn deposit_token(
        &self,
        to: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String> {
        let to_address = parse_address(to)?;
        let token = parse_address(token_address)?;
        let value = parse_token_amount(amount, decimals)?;

        let provider = self.provider();
        let erc20 = Erc20::new(token, provider);

        // Top up the deposit address allowance before the transfer when it
        // is short.
        let allowance: U256 = erc20
            .allowance(self.address, to_address)
            .call()
            .await
            .map_err(|e| SdkError::chain(format!("Failed to read allowance: {}", e)))?;

        if allowance < value {
            debug!("Allowance {} below {}, approving", allowance, value);
            let receipt = erc20
                .approve(to_address, value)
                .send()
                .await
                .map_err(|e| SdkError::chain(format!("Approve failed: {}", e)))?
                .get_receipt()
                .await
                .map_err(|e| SdkError::chain(format!("Approve not confirmed: {}", e)))?;

            if !receipt.status() {
                return Err(SdkError::chain(format!(
                    "Approve reverted: {}",
                    receipt.transaction_hash
                )));
            }
        }

        let receipt = erc20
            .transfer(to_address, value)
            .send()
            .await
            .map_err(|e| SdkError::chain(format!("Token deposit failed: {}", e)))?
            .get_receipt()
            .await
            .map_err(|e| SdkError::chain(format!("Token deposit not confirmed: {}", e)))?;

        if !receipt.status() {
            return Err(SdkError::chain(format!(
                "Token deposit reverted: {}",
                receipt.transaction_hash
            )));
        }

        Ok(receipt.transaction_hash.to_string())
    }

    async fn allowance(&self, spender: &str, token_address: &str) -> SdkResult<u128> {
        let spender = parse_address(spender)?;
        let token = parse_address(token_address)?;

        let allowance: U256 = Erc20::new(token, self.provider())
            .allowance(self.address, spender)
            .call()
            .await
            .map_err(|e| SdkError::chain(format!("Failed to read allowance: {}", e)))?;

        // Token amounts in practice fit u128; anything larger is effectively
        // unlimited.
        Ok(allowance.try_into().unwrap_or(u128::MAX))
    }

    async fn approve(
        &self,
        spender: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String> {
        let spender = parse_address(spender)?;
        let token = parse_address(token_address)?;
        let value = parse_token_amount(amount, decimals)?;

        let receipt = Erc20::new(token, self.provider())
            .approve(spender, value)
            .send()
            .await
            .map_err(|e| SdkError::chain(format!("Approve failed: {}", e)))?
            .get_receipt()
            .await
            .map_err(|e| SdkError::chain(format!("Approve not confirmed: {}", e)))?;

        if !receipt.status() {
            return Err(SdkError::chain(format!(
                "Approve reverted: {}",
                receipt.transaction_hash
            )));
        }

        Ok(receipt.transaction_hash.to_string())
    }
}

impl std::fmt::Debug for EvmWalletOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWalletOptions")
            .field("server_url", &self.server_url)
            .field("chain_id", &self.chain_id)
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

impl std::fmt::Debug for EvmWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWallet")
            .field("address", &self.address)
            .field("chain_id", &self.config.chain_id)
            .finish()
    }
}

fn parse_address(address: &str) -> SdkResult<Address> {
    Address::from_str(address)
        .map_err(|e| SdkError::validation(format!("Invalid address {}: {}", address, e)))
}

/// Convert a display amount to base units for the given decimals
fn parse_token_amount(amount: &str, decimals: u8) -> SdkResult<U256> {
    let parsed = parse_units(amount, decimals)
        .map_err(|e| SdkError::validation(format!("Invalid amount {}: {}", amount, e)))?;
    Ok(parsed.get_absolute())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known test private key (DO NOT use in production!)
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn options() -> EvmWalletOptions {
        EvmWalletOptions {
            server_url: Some("https://api.launchpad.example.com".to_string()),
            private_key: Some(TEST_KEY.to_string()),
            chain_id: Some(97),
            rpc_url: Some("https://data-seed-prebsc-1-s1.bnbchain.org:8545".to_string()),
        }
    }

    #[test]
    fn test_construction_derives_config() {
        let wallet = EvmWallet::new(options()).unwrap();
        let config = wallet.config();

        assert_eq!(
            config.address.to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(config.domain, "api.launchpad.example.com");
        assert_eq!(config.origin, "https://api.launchpad.example.com");
        assert_eq!(config.chain_id, 97);
        assert_eq!(config.network, NetworkType::Evm);
    }

    #[test]
    fn test_construction_fails_on_missing_fields() {
        for strip in ["server_url", "private_key", "chain_id", "rpc_url"] {
            let mut opts = options();
            match strip {
                "server_url" => opts.server_url = None,
                "private_key" => opts.private_key = None,
                "chain_id" => opts.chain_id = None,
                _ => opts.rpc_url = None,
            }
            assert!(
                matches!(EvmWallet::new(opts), Err(SdkError::Config(_))),
                "expected config error when {} is missing",
                strip
            );
        }
    }

    #[test]
    fn test_construction_fails_on_malformed_key() {
        let mut opts = options();
        opts.private_key = Some("0xzznotakey".to_string());
        assert!(matches!(EvmWallet::new(opts), Err(SdkError::Config(_))));
    }

    #[tokio::test]
    async fn test_sign_message_is_hex_signature() {
        let wallet = EvmWallet::new(options()).unwrap();
        let signature = wallet
            .sign_message(&SignMessageParams {
                statement: "Sign in with Ethereum to the app".to_string(),
                nonce: "482916".to_string(),
                domain: "api.launchpad.example.com".to_string(),
                uri: "https://api.launchpad.example.com".to_string(),
            })
            .await
            .unwrap();

        // 65-byte signature: 0x + 130 hex chars
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 132);
    }

    #[test]
    fn test_parse_token_amount() {
        assert_eq!(
            parse_token_amount("1", 6).unwrap(),
            U256::from(1_000_000u64)
        );
        assert_eq!(
            parse_token_amount("0.5", 6).unwrap(),
            U256::from(500_000u64)
        );
        assert!(parse_token_amount("abc", 6).is_err());
    }
}
