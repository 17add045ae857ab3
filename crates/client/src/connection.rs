//! Ledger access used by the client and the token account resolver

use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use tracing::debug;

use crate::{
    config::ClientConfig,
    errors::{ClientError, ClientResult},
};

/// Minimal view of the ledger: read an account, submit one atomic transaction.
pub trait LedgerConnection {
    /// `Ok(None)` when nothing lives at `address`.
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>>;

    /// Sends `instructions` as one transaction. The first signer pays fees.
    fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> ClientResult<()>;
}

pub struct RpcConnection {
    client: RpcClient,
}

impl RpcConnection {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment),
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.client
    }
}

impl LedgerConnection for RpcConnection {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())?;
        Ok(response.value)
    }

    fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> ClientResult<()> {
        let payer = signers
            .first()
            .ok_or_else(|| ClientError::TransactionFailed("no signers provided".to_string()))?;

        let recent_blockhash = self.client.get_latest_blockhash()?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            signers,
            recent_blockhash,
        );

        let signature = self.client.send_and_confirm_transaction(&tx)?;
        debug!(%signature, "transaction confirmed");

        Ok(())
    }
}
