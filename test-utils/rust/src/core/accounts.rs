//! Raw account access and funded signers

use crate::{
    errors::{Result, VmError},
    internal::conversions::{from_lite_account, to_lite_account, to_lite_pubkey},
};
use solana_sdk::{account::Account, pubkey::Pubkey, signature::Keypair, signer::Signer};

use super::vm::Vm;

pub trait AccountManager {
    /// Overwrite the account stored at `pubkey`
    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()>;

    fn get_account(&self, pubkey: &Pubkey) -> Option<Account>;

    /// Fresh keypair holding `lamports`, registered for `prank`
    fn make_account(&mut self, lamports: u64) -> Keypair;

    fn account_exists(&self, pubkey: &Pubkey) -> bool {
        self.get_account(pubkey).is_some()
    }
}

impl AccountManager for Vm {
    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()> {
        self.svm
            .set_account(to_lite_pubkey(pubkey), to_lite_account(account))
            .map_err(|e| VmError::SetAccountFailed(format!("{:?}", e)))
    }

    fn get_account(&self, pubkey: &Pubkey) -> Option<Account> {
        self.svm
            .get_account(&to_lite_pubkey(pubkey))
            .map(from_lite_account)
    }

    fn make_account(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        if let Err(err) = self.svm.airdrop(&to_lite_pubkey(&keypair.pubkey()), lamports) {
            tracing::warn!(pubkey = %keypair.pubkey(), ?err, "airdrop failed");
        }
        self.register_keypair(&keypair);
        keypair
    }
}

impl Vm {
    /// Deserialize an Anchor account, checking its discriminator
    pub fn read_anchor_account<T: anchor_lang::AccountDeserialize>(
        &self,
        pubkey: &Pubkey,
    ) -> Result<T> {
        let account = AccountManager::get_account(self, pubkey)
            .ok_or_else(|| VmError::AccountNotFound(pubkey.to_string()))?;

        T::try_deserialize(&mut account.data.as_slice())
            .map_err(|e| VmError::DeserializeFailed(e.to_string()))
    }
}
