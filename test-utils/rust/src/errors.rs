use thiserror::Error;

pub type Result<T> = std::result::Result<T, VmError>;

/// Framework error types
#[derive(Error, Debug)]
pub enum VmError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Failed to set account: {0}")]
    SetAccountFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Program deployment failed: {0}")]
    DeploymentFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("No signers provided")]
    NoSigners,

    #[error("Token operation failed: {0}")]
    TokenError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Anchor error: {0}")]
    AnchorError(String),

    #[error("Client error: {0}")]
    ClientError(String),

    #[error("Custom error: {0}")]
    Custom(String),

    #[error("Program not found: {0}")]
    ProgramNotFound(String),
}

impl From<anchor_lang::error::Error> for VmError {
    fn from(err: anchor_lang::error::Error) -> Self {
        VmError::AnchorError(err.to_string())
    }
}

impl From<litesvm::types::FailedTransactionMetadata> for VmError {
    fn from(err: litesvm::types::FailedTransactionMetadata) -> Self {
        VmError::TransactionFailed(format!("{:?}", err))
    }
}

impl From<vault_client::ClientError> for VmError {
    fn from(err: vault_client::ClientError) -> Self {
        VmError::ClientError(err.to_string())
    }
}
