//! Client configuration loaded from the environment

use std::str::FromStr;

use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::errors::{ClientError, ClientResult};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            program_id: vault::ID,
        }
    }
}

impl ClientConfig {
    /// Reads `VAULT_RPC_URL`, `VAULT_COMMITMENT` and `VAULT_PROGRAM_ID`, loading a `.env` file first if present.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(rpc_url) = dotenv::var("VAULT_RPC_URL") {
            config.rpc_url = rpc_url;
        }

        if let Ok(commitment) = dotenv::var("VAULT_COMMITMENT") {
            config.commitment = parse_commitment(&commitment)?;
        }

        if let Ok(program_id) = dotenv::var("VAULT_PROGRAM_ID") {
            config.program_id = Pubkey::from_str(&program_id)
                .map_err(|e| ClientError::InvalidConfig(format!("VAULT_PROGRAM_ID: {e}")))?;
        }

        Ok(config)
    }
}

fn parse_commitment(value: &str) -> ClientResult<CommitmentConfig> {
    match value.to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(ClientError::InvalidConfig(format!(
            "unknown commitment level: {other}"
        ))),
    }
}
