//! Solana wallet adapter
//!
//! Signs SIWS sign-in messages with the held ed25519 keypair and assembles
//! the mint, deposit, and token-transfer transactions against the
//! configured cluster.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, SecondsFormat, Utc};
use launchpad_core::{
    parse_positive_amount, NetworkType, SdkError, SdkResult, DEFAULT_TOKEN_DECIMALS,
    DEFAULT_TOKEN_SUPPLY,
};
use mpl_token_metadata::instructions::CreateMetadataAccountV3Builder;
use mpl_token_metadata::types::DataV2;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use solana_system_interface::instruction as system_instruction;
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use spl_token::instruction::{self as token_instruction, AuthorityType};
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

use crate::adapter::{
    SignMessageParams, TokenDeployment, TokenDeploymentResult, WalletAdapter, WalletConfig,
};
use crate::message::{siws_message, SignInFields};

/// Size of an SPL mint account
const MINT_SIZE: usize = 82;
/// Chain id embedded in SIWS payloads (devnet/testnet namespace)
const SIWS_CHAIN_ID: u64 = 3;
/// Sign-in sessions expire after 30 days
const SIGN_IN_VALIDITY_DAYS: i64 = 30;

/// Solana cluster the adapter connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
}

impl Cluster {
    /// Public RPC endpoint of the cluster
    pub fn api_url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            _ => Err(format!("Unknown cluster: {}", s)),
        }
    }
}

/// Credentials for constructing a [`SolanaWallet`]; every field is required
#[derive(Clone, Default)]
pub struct SolanaWalletOptions {
    pub server_url: Option<String>,
    /// Keypair bytes encoded as base64 or hex
    pub private_key: Option<String>,
    pub chain_id: Option<u64>,
    pub cluster: Option<Cluster>,
    /// Overrides the cluster's public RPC endpoint when set
    pub rpc_url: Option<String>,
}

/// Wallet adapter for Solana clusters
pub struct SolanaWallet {
    keypair: Keypair,
    pubkey: Pubkey,
    rpc: RpcClient,
    config: WalletConfig,
}

impl SolanaWallet {
    /// Construct the adapter, failing fast on any missing or malformed
    /// credential. No network operation runs here.
    pub fn new(options: SolanaWalletOptions) -> SdkResult<Self> {
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
        let cluster = options
            .cluster
            .ok_or_else(|| SdkError::config("cluster is required"))?;

        let parsed = Url::parse(&server_url)
            .map_err(|e| SdkError::config(format!("Invalid server URL {}: {}", server_url, e)))?;
        let domain = parsed
            .host_str()
            .ok_or_else(|| SdkError::config(format!("Server URL {} has no host", server_url)))?
            .to_string();
        let origin = parsed.origin().ascii_serialization();

        let keypair = parse_private_key(&private_key)?;
        let pubkey = keypair.pubkey();
        info!("Loaded Solana wallet: {} ({})", pubkey, cluster.as_str());

        let rpc_endpoint = options
            .rpc_url
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| cluster.api_url().to_string());
        let rpc = RpcClient::new_with_commitment(rpc_endpoint, CommitmentConfig::confirmed());

        Ok(Self {
            keypair,
            pubkey,
            rpc,
            config: WalletConfig {
                address: pubkey.to_string(),
                domain,
                origin,
                network: NetworkType::Solana,
                chain_id,
            },
        })
    }
}

#[async_trait]
impl WalletAdapter for SolanaWallet {
    fn config(&self) -> &WalletConfig {
        &self.config
    }

    async fn sign_message(&self, params: &SignMessageParams) -> SdkResult<String> {
        let now = Utc::now();
        let text = siws_message(&SignInFields {
            domain: params.domain.clone(),
            address: self.config.address.clone(),
            statement: params.statement.clone(),
            uri: params.uri.clone(),
            chain_id: SIWS_CHAIN_ID.to_string(),
            nonce: params.nonce.clone(),
            issued_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            expiration_time: Some(
                (now + Duration::days(SIGN_IN_VALIDITY_DAYS))
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        });

        let signature = self.keypair.sign_message(text.as_bytes());
        Ok(STANDARD.encode(signature))
    }

    async fn create_token(&self, deployment: &TokenDeployment) -> SdkResult<TokenDeploymentResult> {
        let factory = parse_pubkey(&deployment.factory_address)?;
        let fee_lamports: u64 = deployment.creation_fee.parse().map_err(|_| {
            SdkError::validation(format!(
                "Invalid token creation fee: {}",
                deployment.creation_fee
            ))
        })?;

        let mint_keypair = Keypair::new();
        let mint = mint_keypair.pubkey();
        let payer = self.pubkey;
        let decimals = DEFAULT_TOKEN_DECIMALS;
        let supply = DEFAULT_TOKEN_SUPPLY * 10u64.pow(decimals as u32);

        let payer_ata = get_associated_token_address(&payer, &mint);
        let factory_ata = get_associated_token_address(&factory, &mint);

        let rent = self
            .rpc
            .get_minimum_balance_for_rent_exemption(MINT_SIZE)
            .await
            .map_err(|e| SdkError::chain(format!("Failed to read rent exemption: {}", e)))?;

        debug!("Creating mint {} (supply {}, fee {})", mint, supply, fee_lamports);

        let metadata_uri = deployment.metadata_url.clone().unwrap_or_default();
        let (metadata_account, _) = Pubkey::find_program_address(
            &[
                b"metadata",
                mpl_token_metadata::ID.as_ref(),
                mint.as_ref(),
            ],
            &mpl_token_metadata::ID,
        );

        let metadata_ix = CreateMetadataAccountV3Builder::new()
            .metadata(metadata_account)
            .mint(mint)
            .mint_authority(payer)
            .payer(payer)
            .update_authority(payer, true)
            .data(DataV2 {
                name: deployment.token_name.clone(),
                symbol: deployment.token_symbol.clone(),
                uri: metadata_uri,
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            })
            .is_mutable(true)
            .instruction();

        let instructions = vec![
            system_instruction::create_account(
                &payer,
                &mint,
                rent,
                MINT_SIZE as u64,
                &spl_token::id(),
            ),
            token_instruction::initialize_mint2(
                &spl_token::id(),
                &mint,
                &payer,
                Some(&payer),
                decimals,
            )
            .map_err(|e| SdkError::chain(format!("Failed to build mint init: {}", e)))?,
            create_associated_token_account_idempotent(&payer, &payer, &mint, &spl_token::id()),
            token_instruction::mint_to(&spl_token::id(), &mint, &payer_ata, &payer, &[], supply)
                .map_err(|e| SdkError::chain(format!("Failed to build mint-to: {}", e)))?,
            metadata_ix,
            token_instruction::set_authority(
                &spl_token::id(),
                &mint,
                None,
                AuthorityType::MintTokens,
                &payer,
                &[],
            )
            .map_err(|e| SdkError::chain(format!("Failed to build authority revoke: {}", e)))?,
            token_instruction::set_authority(
                &spl_token::id(),
                &mint,
                None,
                AuthorityType::FreezeAccount,
                &payer,
                &[],
            )
            .map_err(|e| SdkError::chain(format!("Failed to build authority revoke: {}", e)))?,
            system_instruction::transfer(&payer, &factory, fee_lamports),
            create_associated_token_account_idempotent(&payer, &factory, &mint, &spl_token::id()),
            token_instruction::transfer_checked(
                &spl_token::id(),
                &payer_ata,
                &mint,
                &factory_ata,
                &payer,
                &[],
                supply,
                decimals,
            )
            .map_err(|e| SdkError::chain(format!("Failed to build supply transfer: {}", e)))?,
        ];

        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| SdkError::chain(format!("Failed to fetch blockhash: {}", e)))?;

        let tx = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer),
            &[&self.keypair, &mint_keypair],
            blockhash,
        );

        let signature = self
            .rpc
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(|e| SdkError::chain(format!("Token creation failed: {}", e)))?;

        Ok(TokenDeploymentResult {
            tx_hash: signature.to_string(),
            token_address: Some(mint.to_string()),
        })
    }

    async fn deposit(&self, to: &str, amount: &str) -> SdkResult<String> {
        let to = parse_pubkey(to)?;
        let lamports = (parse_positive_amount(amount)? * LAMPORTS_PER_SOL as f64).floor() as u64;

        debug!("Depositing {} lamports to {}", lamports, to);

        let instruction = system_instruction::transfer(&self.pubkey, &to, lamports);
        self.send_signed(&[instruction]).await
    }

    async fn deposit_token(
        &self,
        to: &str,
        amount: &str,
        token_address: &str,
        decimals: u8,
    ) -> SdkResult<String> {
        let to = parse_pubkey(to)?;
        let mint = parse_pubkey(token_address)?;
        let raw_amount =
            (parse_positive_amount(amount)? * 10f64.powi(decimals as i32)).floor() as u64;

        let from_ata = get_associated_token_address(&self.pubkey, &mint);
        let to_ata = get_associated_token_address(&to, &mint);

        debug!("Depositing {} of {} to {}", raw_amount, mint, to);

        // ATAs are created idempotently so a first-time deposit works.
        let instructions = vec![
            create_associated_token_account_idempotent(
                &self.pubkey,
                &self.pubkey,
                &mint,
                &spl_token::id(),
            ),
            create_associated_token_account_idempotent(&self.pubkey, &to, &mint, &spl_token::id()),
            token_instruction::transfer_checked(
                &spl_token::id(),
                &from_ata,
                &mint,
                &to_ata,
                &self.pubkey,
                &[],
                raw_amount,
                decimals,
            )
            .map_err(|e| SdkError::chain(format!("Failed to build transfer: {}", e)))?,
        ];

        self.send_signed(&instructions).await
    }

    async fn allowance(&self, _spender: &str, _token_address: &str) -> SdkResult<u128> {
        // The token program has no allowance concept in this flow.
        Ok(0)
    }

    async fn approve(
        &self,
        _spender: &str,
        _amount: &str,
        _token_address: &str,
        _decimals: u8,
    ) -> SdkResult<String> {
        // No-op on Solana; deposits transfer directly.
        Ok(String::new())
    }
}

impl SolanaWallet {
    async fn send_signed(
        &self,
        instructions: &[solana_sdk::instruction::Instruction],
    ) -> SdkResult<String> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| SdkError::chain(format!("Failed to fetch blockhash: {}", e)))?;

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.pubkey),
            &[&self.keypair],
            blockhash,
        );

        let signature = self
            .rpc
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(|e| SdkError::chain(format!("Transaction failed: {}", e)))?;

        Ok(signature.to_string())
    }
}

impl std::fmt::Debug for SolanaWalletOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaWalletOptions")
            .field("server_url", &self.server_url)
            .field("chain_id", &self.chain_id)
            .field("cluster", &self.cluster)
            .finish()
    }
}

impl std::fmt::Debug for SolanaWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaWallet")
            .field("address", &self.pubkey)
            .finish()
    }
}

fn parse_pubkey(address: &str) -> SdkResult<Pubkey> {
    Pubkey::from_str(address)
        .map_err(|e| SdkError::validation(format!("Invalid address {}: {}", address, e)))
}

/// Decode a private key, accepting base64 first and hex as a fallback
fn parse_private_key(key: &str) -> SdkResult<Keypair> {
    if let Ok(bytes) = STANDARD.decode(key) {
        if let Ok(keypair) = Keypair::try_from(bytes.as_slice()) {
            return Ok(keypair);
        }
    }

    let bytes = hex::decode(key).map_err(|_| {
        SdkError::config("Invalid private key format, expected base64 or hex")
    })?;
    Keypair::try_from(bytes.as_slice())
        .map_err(|_| SdkError::config("Invalid private key format, expected base64 or hex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_key(private_key: String) -> SolanaWalletOptions {
        SolanaWalletOptions {
            server_url: Some("https://api.launchpad.example.com".to_string()),
            private_key: Some(private_key),
            chain_id: Some(97),
            cluster: Some(Cluster::Devnet),
            rpc_url: None,
        }
    }

    #[test]
    fn test_private_key_base64_and_hex() {
        let keypair = Keypair::new();
        let bytes = keypair.to_bytes();

        let from_base64 = parse_private_key(&STANDARD.encode(bytes)).unwrap();
        assert_eq!(from_base64.pubkey(), keypair.pubkey());

        let from_hex = parse_private_key(&hex::encode(bytes)).unwrap();
        assert_eq!(from_hex.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_private_key_rejects_junk() {
        assert!(matches!(
            parse_private_key("definitely-not-a-key"),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_construction_derives_config() {
        let keypair = Keypair::new();
        let wallet =
            SolanaWallet::new(options_with_key(STANDARD.encode(keypair.to_bytes()))).unwrap();

        let config = wallet.config();
        assert_eq!(config.address, keypair.pubkey().to_string());
        assert_eq!(config.domain, "api.launchpad.example.com");
        assert_eq!(config.network, NetworkType::Solana);
    }

    #[test]
    fn test_construction_fails_on_missing_fields() {
        let keypair = Keypair::new();
        let key = STANDARD.encode(keypair.to_bytes());

        for strip in ["server_url", "private_key", "chain_id", "cluster"] {
            let mut opts = options_with_key(key.clone());
            match strip {
                "server_url" => opts.server_url = None,
                "private_key" => opts.private_key = None,
                "chain_id" => opts.chain_id = None,
                _ => opts.cluster = None,
            }
            assert!(
                matches!(SolanaWallet::new(opts), Err(SdkError::Config(_))),
                "expected config error when {} is missing",
                strip
            );
        }
    }

    #[tokio::test]
    async fn test_sign_message_returns_verifiable_base64() {
        let keypair = Keypair::new();
        let wallet =
            SolanaWallet::new(options_with_key(STANDARD.encode(keypair.to_bytes()))).unwrap();

        let signature = wallet
            .sign_message(&SignMessageParams {
                statement: "Sign in with Solana to the app".to_string(),
                nonce: "482916".to_string(),
                domain: "api.launchpad.example.com".to_string(),
                uri: "https://api.launchpad.example.com".to_string(),
            })
            .await
            .unwrap();

        let decoded = STANDARD.decode(&signature).unwrap();
        assert_eq!(decoded.len(), 64);
    }

    #[test]
    fn test_cluster_parsing() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!(
            "mainnet-beta".parse::<Cluster>().unwrap(),
            Cluster::MainnetBeta
        );
        assert!("localnet".parse::<Cluster>().is_err());
        assert_eq!(
            Cluster::Devnet.api_url(),
            "https://api.devnet.solana.com"
        );
    }
}
