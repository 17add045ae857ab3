//! Lets the vault client drive the in-process VM

use solana_sdk::{account::Account, instruction::Instruction, pubkey::Pubkey, signature::Keypair};
use vault_client::{ClientError, ClientResult, LedgerConnection};

use super::{accounts::AccountManager, transactions::TransactionBuilder, vm::Vm};

impl LedgerConnection for Vm {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        Ok(AccountManager::get_account(self, address))
    }

    fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> ClientResult<()> {
        TransactionBuilder::new(self)
            .instructions(instructions)
            .signers(signers)
            .and_then(TransactionBuilder::execute)
            .map(|_| ())
            .map_err(|e| ClientError::TransactionFailed(e.to_string()))
    }
}
