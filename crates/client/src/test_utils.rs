use std::collections::HashMap;

use anchor_lang::AccountSerialize;
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
};
use spl_token::{
    solana_program::program_pack::Pack,
    state::{Account as SplTokenAccount, AccountState, Mint},
};

use crate::{
    connection::LedgerConnection,
    errors::{ClientError, ClientResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendBehavior {
    Succeed,
    /// Fails every send
    Fail,
    /// Another party creates the account, then our send fails
    FailButCreate,
}

/// In-memory ledger that understands associated token account creation.
pub struct MockConnection {
    pub accounts: HashMap<Pubkey, Account>,
    pub behavior: SendBehavior,
    pub sends: usize,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            behavior: SendBehavior::Succeed,
            sends: 0,
        }
    }

    pub fn add_mint(&mut self, token_program: &Pubkey) -> Pubkey {
        let mint = Pubkey::new_unique();
        let mut data = vec![0u8; Mint::LEN];
        Mint::pack(
            Mint {
                mint_authority: solana_sdk::program_option::COption::Some(Pubkey::new_unique()),
                supply: 0,
                decimals: 6,
                is_initialized: true,
                freeze_authority: solana_sdk::program_option::COption::None,
            },
            &mut data,
        )
        .unwrap();

        self.accounts.insert(
            mint,
            Account {
                lamports: 1_461_600,
                data,
                owner: *token_program,
                executable: false,
                rent_epoch: 0,
            },
        );
        mint
    }

    pub fn token_account_data(owner: &Pubkey, mint: &Pubkey, amount: u64) -> Vec<u8> {
        let mut data = vec![0u8; SplTokenAccount::LEN];
        SplTokenAccount::pack(
            SplTokenAccount {
                mint: *mint,
                owner: *owner,
                amount,
                delegate: solana_sdk::program_option::COption::None,
                state: AccountState::Initialized,
                is_native: solana_sdk::program_option::COption::None,
                delegated_amount: 0,
                close_authority: solana_sdk::program_option::COption::None,
            },
            &mut data,
        )
        .unwrap();
        data
    }

    pub fn add_token_account(
        &mut self,
        owner: &Pubkey,
        mint: &Pubkey,
        token_program: &Pubkey,
        amount: u64,
    ) -> Pubkey {
        let address = crate::pda::token_account_address(owner, mint, token_program);
        self.accounts.insert(
            address,
            Account {
                lamports: 2_039_280,
                data: Self::token_account_data(owner, mint, amount),
                owner: *token_program,
                executable: false,
                rent_epoch: 0,
            },
        );
        address
    }

    pub fn add_program_account<T: AccountSerialize>(&mut self, address: Pubkey, value: &T) {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        self.accounts.insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner: vault::ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    // accounts: [funding, associated_account, wallet, mint, system_program, token_program]
    fn apply_ata_create(&mut self, ix: &Instruction) {
        if ix.program_id != spl_associated_token_account::ID {
            return;
        }

        let wallet = ix.accounts[2].pubkey;
        let mint = ix.accounts[3].pubkey;
        let token_program = ix.accounts[5].pubkey;
        self.add_token_account(&wallet, &mint, &token_program, 0);
    }
}

impl LedgerConnection for MockConnection {
    fn get_account(&self, address: &Pubkey) -> ClientResult<Option<Account>> {
        Ok(self.accounts.get(address).cloned())
    }

    fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        _signers: &[&Keypair],
    ) -> ClientResult<()> {
        self.sends += 1;

        match self.behavior {
            SendBehavior::Succeed => {
                instructions.iter().for_each(|ix| self.apply_ata_create(ix));
                Ok(())
            }
            SendBehavior::Fail => Err(ClientError::TransactionFailed(
                "account in use".to_string(),
            )),
            SendBehavior::FailButCreate => {
                instructions.iter().for_each(|ix| self.apply_ata_create(ix));
                Err(ClientError::TransactionFailed(
                    "Provided owner is not allowed".to_string(),
                ))
            }
        }
    }
}
