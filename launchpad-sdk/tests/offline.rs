//! Offline behavior: everything that must succeed or fail before a single
//! network call is issued.

use launchpad_sdk::{
    future_epoch_in_minutes, Cluster, DepositParams, OrderRequest, OrderSide, SdkError,
    SdkOptions, WalletAdapter, WithdrawalRequest,
};
use launchpad_wallet::SignMessageParams;

// Well-known anvil/hardhat development key.
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const SERVER_URL: &str = "https://api.launchpad.example.com";

fn evm_options() -> SdkOptions {
    SdkOptions::evm(SERVER_URL, DEV_PRIVATE_KEY, 97, "https://rpc.example.com")
}

#[test]
fn evm_wallet_derives_address_and_domain() {
    let wallet = evm_options().build_wallet().unwrap();
    let config = wallet.config();

    assert_eq!(config.address, DEV_ADDRESS);
    assert_eq!(config.domain, "api.launchpad.example.com");
    assert_eq!(config.origin, SERVER_URL);
    assert_eq!(config.chain_id, 97);
}

#[test]
fn missing_credentials_fail_at_construction() {
    let mut options = evm_options();
    options.private_key = None;
    assert!(matches!(options.build_wallet(), Err(SdkError::Config(_))));

    let mut options = SdkOptions::solana(SERVER_URL, "not-a-real-key", 3, Cluster::Devnet);
    options.server_url = None;
    assert!(matches!(options.build_wallet(), Err(SdkError::Config(_))));
}

#[test]
fn malformed_evm_key_is_a_config_error() {
    let options = SdkOptions::evm(SERVER_URL, "0xnot-hex", 97, "https://rpc.example.com");
    assert!(matches!(options.build_wallet(), Err(SdkError::Config(_))));
}

#[tokio::test]
async fn evm_sign_message_needs_no_rpc() {
    let wallet = evm_options().build_wallet().unwrap();

    let signature = wallet
        .sign_message(&SignMessageParams {
            statement: "Sign in with Ethereum to the app".to_string(),
            nonce: "482916".to_string(),
            domain: "api.launchpad.example.com".to_string(),
            uri: SERVER_URL.to_string(),
        })
        .await
        .unwrap();

    // 65-byte secp256k1 signature, 0x-prefixed.
    assert!(signature.starts_with("0x"));
    assert_eq!(signature.len(), 132);
}

#[test]
fn write_requests_validate_before_the_wire() {
    let deposit = DepositParams {
        amount: "-1".to_string(),
        blockchain_key: "eip155:97".to_string(),
        token_id: "slip44:714".to_string(),
    };
    assert!(matches!(
        deposit.validate("eip155:97"),
        Err(SdkError::Validation(_))
    ));

    let withdrawal = WithdrawalRequest {
        token_id: "erc20:0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567".to_string(),
        user_address: String::new(),
        request_amount: "0.2".to_string(),
    };
    assert!(matches!(
        withdrawal.validate(),
        Err(SdkError::Validation(_))
    ));

    let order = OrderRequest {
        base_token_id: "erc20:0x1737eFBa9e477c6a9ae8d7F47332604eEcc2a567".to_string(),
        quote_token_id: "erc20:0xCf4E54700156e74918EaF77A9ab8C050C8b05890".to_string(),
        amount: "17411.608737".to_string(),
        price: "0.1".to_string(),
        slippage: "1".to_string(),
        deadline: future_epoch_in_minutes(10),
        blockchain_key: "eip155:56".to_string(),
        order_type: OrderSide::Buy,
    };
    // Network mismatch against the active chain.
    assert!(matches!(
        order.validate("eip155:97"),
        Err(SdkError::Validation(_))
    ));
    assert!(order.validate("eip155:56").is_ok());
}
