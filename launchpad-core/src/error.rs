//! Error types for the SDK

use thiserror::Error;

/// SDK-wide error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Missing or malformed credential at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local validation failure, raised before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the platform
    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Key handling or message signing failure
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// On-chain failure: RPC error, contract revert, confirmation failure
    #[error("Chain error: {0}")]
    Chain(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SdkError {
    pub fn config(msg: impl Into<String>) -> Self {
        SdkError::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        SdkError::Validation(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        SdkError::Auth(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        SdkError::Network(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        SdkError::Api(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        SdkError::Parse(msg.into())
    }

    pub fn wallet(msg: impl Into<String>) -> Self {
        SdkError::Wallet(msg.into())
    }

    pub fn chain(msg: impl Into<String>) -> Self {
        SdkError::Chain(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        SdkError::NotFound(msg.into())
    }
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
