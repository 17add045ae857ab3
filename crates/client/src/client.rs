//! High level vault operations over any [`LedgerConnection`]

use anchor_lang::AccountDeserialize;
use anchor_spl::token_interface::TokenAccount;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use tracing::{debug, info};
use vault::state::{GlobalRegistry, UserPosition, Vault};

use crate::{
    connection::LedgerConnection,
    errors::{ClientError, ClientResult},
    instructions::*,
    pda::{registry_address, token_account_address, user_position_address, vault_address},
    resolver::{mint_token_program, resolve_or_create},
};

pub struct VaultClient<C: LedgerConnection> {
    connection: C,
    /// Fee payer for every transaction, also the registry authority on `initialize_registry`
    payer: Keypair,
    program_id: Pubkey,
}

impl<C: LedgerConnection> VaultClient<C> {
    pub fn new(connection: C, payer: Keypair, program_id: Pubkey) -> Self {
        Self {
            connection,
            payer,
            program_id,
        }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn send(&mut self, ix: Instruction, signer: &Keypair) -> ClientResult<()> {
        if signer.pubkey() == self.payer.pubkey() {
            self.connection.send_instructions(&[ix], &[&self.payer])
        } else {
            self.connection.send_instructions(&[ix], &[&self.payer, signer])
        }
    }

    fn fetch<T: AccountDeserialize>(&self, address: &Pubkey) -> ClientResult<Option<T>> {
        let Some(account) = self.connection.get_account(address)? else {
            return Ok(None);
        };

        if account.owner != self.program_id {
            return Err(ClientError::DeserializeFailed(format!(
                "{address} is not owned by the vault program"
            )));
        }

        let value = T::try_deserialize(&mut account.data.as_slice())?;
        Ok(Some(value))
    }

    /***********************************|
    |              Queries              |
    |__________________________________*/

    pub fn get_registry(&self) -> ClientResult<Option<GlobalRegistry>> {
        self.fetch(&registry_address(&self.program_id).0)
    }

    pub fn get_vault(&self, vault_id: u64) -> ClientResult<Vault> {
        let address = vault_address(&self.program_id, vault_id).0;
        self.fetch(&address)?
            .ok_or(ClientError::AccountNotFound(address))
    }

    pub fn get_position(&self, vault_id: u64, owner: &Pubkey) -> ClientResult<Option<UserPosition>> {
        let vault = vault_address(&self.program_id, vault_id).0;
        self.fetch(&user_position_address(&self.program_id, &vault, owner).0)
    }

    /// Balance of `owner`'s canonical token account for `mint`, zero if it does not exist yet.
    pub fn get_balance(&self, owner: &Pubkey, mint: &Pubkey) -> ClientResult<u64> {
        let token_program = mint_token_program(&self.connection, mint)?;
        let address = token_account_address(owner, mint, &token_program);

        match self.connection.get_account(&address)? {
            Some(account) => {
                let token_account = TokenAccount::try_deserialize(&mut account.data.as_slice())?;
                Ok(token_account.amount)
            }
            None => Ok(0),
        }
    }

    /***********************************|
    |              Registry             |
    |__________________________________*/

    pub fn initialize_registry(&mut self) -> ClientResult<()> {
        let ix = init_registry_ix(&self.program_id, &self.payer.pubkey());
        self.connection.send_instructions(&[ix], &[&self.payer])?;

        info!(authority = %self.payer.pubkey(), "registry initialized");
        Ok(())
    }

    /// Initializes the registry unless it already is.
    pub fn ensure_registry(&mut self) -> ClientResult<GlobalRegistry> {
        if let Some(registry) = self.get_registry()? {
            if registry.initialized {
                debug!("registry already initialized");
                return Ok(registry);
            }
        }

        self.initialize_registry()?;
        self.get_registry()?
            .ok_or(ClientError::RegistryNotInitialized)
    }

    pub fn update_authority(&mut self, authority: &Keypair, new_authority: &Pubkey) -> ClientResult<()> {
        let ix = update_authority_ix(&self.program_id, &authority.pubkey(), new_authority);
        self.send(ix, authority)
    }

    /***********************************|
    |               Vaults              |
    |__________________________________*/

    /// Creates a vault over `collateral_mint` and returns its id. A `max_deposit` of 0 means uncapped.
    pub fn create_vault(
        &mut self,
        creator: &Keypair,
        collateral_mint: &Pubkey,
        max_deposit: u64,
    ) -> ClientResult<u64> {
        let registry = self
            .get_registry()?
            .filter(|registry| registry.initialized)
            .ok_or(ClientError::RegistryNotInitialized)?;

        let vault_id = registry.next_vault_id;
        let token_program = mint_token_program(&self.connection, collateral_mint)?;

        let ix = create_vault_ix(
            &self.program_id,
            &creator.pubkey(),
            vault_id,
            collateral_mint,
            &token_program,
            max_deposit,
        );
        self.send(ix, creator)?;

        info!(vault_id, creator = %creator.pubkey(), "vault created");
        Ok(vault_id)
    }

    pub fn freeze(&mut self, creator: &Keypair, vault_id: u64) -> ClientResult<()> {
        let ix = freeze_vault_ix(&self.program_id, &creator.pubkey(), vault_id);
        self.send(ix, creator)
    }

    pub fn unfreeze(&mut self, creator: &Keypair, vault_id: u64) -> ClientResult<()> {
        let ix = unfreeze_vault_ix(&self.program_id, &creator.pubkey(), vault_id);
        self.send(ix, creator)
    }

    pub fn close(&mut self, creator: &Keypair, vault_id: u64) -> ClientResult<()> {
        let ix = close_vault_ix(&self.program_id, &creator.pubkey(), vault_id);
        self.send(ix, creator)
    }

    pub fn set_max_deposit(&mut self, creator: &Keypair, vault_id: u64, max_deposit: u64) -> ClientResult<()> {
        let ix = set_max_deposit_ix(&self.program_id, &creator.pubkey(), vault_id, max_deposit);
        self.send(ix, creator)
    }

    fn vault_accounts(&self, vault_id: u64) -> ClientResult<VaultAccounts> {
        let vault = self.get_vault(vault_id)?;
        let token_program = mint_token_program(&self.connection, &vault.collateral_mint)?;

        Ok(VaultAccounts::new(
            &self.program_id,
            vault_id,
            &vault.collateral_mint,
            &token_program,
        ))
    }

    /***********************************|
    |           Fund movement           |
    |__________________________________*/

    /// Deposits from the depositor's canonical collateral account. `u64::MAX` deposits the whole balance.
    pub fn deposit(&mut self, depositor: &Keypair, vault_id: u64, amount: u64) -> ClientResult<()> {
        let accounts = self.vault_accounts(vault_id)?;
        let source = accounts.collateral_account_of(&depositor.pubkey());

        let ix = deposit_ix(&self.program_id, &accounts, &depositor.pubkey(), &source, amount);
        self.send(ix, depositor)?;

        debug!(vault_id, depositor = %depositor.pubkey(), amount, "deposit");
        Ok(())
    }

    /// Redeems shares from the withdrawer's canonical share account. `u64::MAX` redeems every share.
    pub fn withdraw(&mut self, withdrawer: &Keypair, vault_id: u64, amount: u64) -> ClientResult<()> {
        let accounts = self.vault_accounts(vault_id)?;
        let source = accounts.share_account_of(&withdrawer.pubkey());

        let ix = withdraw_ix(&self.program_id, &accounts, &withdrawer.pubkey(), &source, amount);
        self.send(ix, withdrawer)?;

        debug!(vault_id, withdrawer = %withdrawer.pubkey(), amount, "withdraw");
        Ok(())
    }

    pub fn resolve_or_create(&mut self, owner: &Pubkey, mint: &Pubkey) -> ClientResult<Pubkey> {
        resolve_or_create(&mut self.connection, &self.payer, owner, mint)
    }
}
