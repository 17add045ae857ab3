use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Token account resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("Registry is not initialized")]
    RegistryNotInitialized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ClientError::RpcError(err.to_string())
    }
}

impl From<anchor_lang::error::Error> for ClientError {
    fn from(err: anchor_lang::error::Error) -> Self {
        ClientError::DeserializeFailed(err.to_string())
    }
}
