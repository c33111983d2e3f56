//! Platform-wide defaults

use crate::network::NetworkType;

/// Default platform domain
pub const DEFAULT_DOMAIN: &str = "launchpad.example.com";
/// Default web origin of the platform
pub const DEFAULT_BASE_ORIGIN: &str = "https://app.launchpad.example.com";
/// Path prefix of the platform REST API
pub const DEFAULT_FEATURE: &str = "/api";
/// API version segment
pub const DEFAULT_VERSION: &str = "/v1";

/// Initial supply minted for every created token, before decimals
pub const DEFAULT_TOKEN_SUPPLY: u64 = 2_000_000_000;
/// Decimals used by created tokens on both network types
pub const DEFAULT_TOKEN_DECIMALS: u8 = 6;

/// Statement embedded in the sign-in message per network type
pub fn default_sign_in_statement(network: NetworkType) -> &'static str {
    match network {
        NetworkType::Evm => "Sign in with Ethereum to the app",
        NetworkType::Solana => "Sign in with Solana to the app",
    }
}
