//! Instruction builders for every vault program entrypoint

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::pda::{
    registry_address, share_mint_address, token_account_address, user_position_address,
    vault_address,
};

fn build(program_id: &Pubkey, accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub fn init_registry_ix(program_id: &Pubkey, authority: &Pubkey) -> Instruction {
    build(
        program_id,
        vault::accounts::InitRegistry {
            authority: *authority,
            global_registry: registry_address(program_id).0,
            system_program: solana_sdk::system_program::ID,
        },
        vault::instruction::InitRegistry {},
    )
}

pub fn update_authority_ix(
    program_id: &Pubkey,
    signer: &Pubkey,
    new_authority: &Pubkey,
) -> Instruction {
    build(
        program_id,
        vault::accounts::UpdateAuthority {
            signer: *signer,
            global_registry: registry_address(program_id).0,
        },
        vault::instruction::UpdateAuthority {
            new_authority: *new_authority,
        },
    )
}

/// `vault_id` must be the registry's current `next_vault_id`.
pub fn create_vault_ix(
    program_id: &Pubkey,
    creator: &Pubkey,
    vault_id: u64,
    collateral_mint: &Pubkey,
    token_program: &Pubkey,
    max_deposit: u64,
) -> Instruction {
    let vault = vault_address(program_id, vault_id).0;

    build(
        program_id,
        vault::accounts::CreateVault {
            creator: *creator,
            global_registry: registry_address(program_id).0,
            vault,
            collateral_mint: *collateral_mint,
            share_mint: share_mint_address(program_id, &vault).0,
            token_program: *token_program,
            system_program: solana_sdk::system_program::ID,
        },
        vault::instruction::CreateVault { max_deposit },
    )
}

fn update_vault_accounts(
    program_id: &Pubkey,
    signer: &Pubkey,
    vault_id: u64,
) -> vault::accounts::UpdateVault {
    vault::accounts::UpdateVault {
        signer: *signer,
        vault: vault_address(program_id, vault_id).0,
    }
}

pub fn freeze_vault_ix(program_id: &Pubkey, signer: &Pubkey, vault_id: u64) -> Instruction {
    build(
        program_id,
        update_vault_accounts(program_id, signer, vault_id),
        vault::instruction::FreezeVault {},
    )
}

pub fn unfreeze_vault_ix(program_id: &Pubkey, signer: &Pubkey, vault_id: u64) -> Instruction {
    build(
        program_id,
        update_vault_accounts(program_id, signer, vault_id),
        vault::instruction::UnfreezeVault {},
    )
}

pub fn close_vault_ix(program_id: &Pubkey, signer: &Pubkey, vault_id: u64) -> Instruction {
    build(
        program_id,
        update_vault_accounts(program_id, signer, vault_id),
        vault::instruction::CloseVault {},
    )
}

pub fn set_max_deposit_ix(
    program_id: &Pubkey,
    signer: &Pubkey,
    vault_id: u64,
    max_deposit: u64,
) -> Instruction {
    build(
        program_id,
        update_vault_accounts(program_id, signer, vault_id),
        vault::instruction::SetMaxDeposit { max_deposit },
    )
}

/// Accounts shared by deposit and withdraw: the vault, its mints and the user's addresses.
#[derive(Debug, Clone, Copy)]
pub struct VaultAccounts {
    pub vault: Pubkey,
    pub collateral_mint: Pubkey,
    pub share_mint: Pubkey,
    pub token_program: Pubkey,
}

impl VaultAccounts {
    pub fn new(
        program_id: &Pubkey,
        vault_id: u64,
        collateral_mint: &Pubkey,
        token_program: &Pubkey,
    ) -> Self {
        let vault = vault_address(program_id, vault_id).0;

        Self {
            vault,
            collateral_mint: *collateral_mint,
            share_mint: share_mint_address(program_id, &vault).0,
            token_program: *token_program,
        }
    }

    pub fn vault_collateral_account(&self) -> Pubkey {
        token_account_address(&self.vault, &self.collateral_mint, &self.token_program)
    }

    pub fn collateral_account_of(&self, owner: &Pubkey) -> Pubkey {
        token_account_address(owner, &self.collateral_mint, &self.token_program)
    }

    pub fn share_account_of(&self, owner: &Pubkey) -> Pubkey {
        token_account_address(owner, &self.share_mint, &self.token_program)
    }
}

pub fn deposit_ix(
    program_id: &Pubkey,
    accounts: &VaultAccounts,
    depositor: &Pubkey,
    depositor_collateral_account: &Pubkey,
    amount: u64,
) -> Instruction {
    build(
        program_id,
        vault::accounts::Deposit {
            depositor: *depositor,
            vault: accounts.vault,
            user_position: user_position_address(program_id, &accounts.vault, depositor).0,
            collateral_mint: accounts.collateral_mint,
            share_mint: accounts.share_mint,
            depositor_collateral_account: *depositor_collateral_account,
            depositor_share_account: accounts.share_account_of(depositor),
            vault_collateral_account: accounts.vault_collateral_account(),
            token_program: accounts.token_program,
            associated_token_program: anchor_spl::associated_token::ID,
            system_program: solana_sdk::system_program::ID,
        },
        vault::instruction::Deposit { amount },
    )
}

pub fn withdraw_ix(
    program_id: &Pubkey,
    accounts: &VaultAccounts,
    withdrawer: &Pubkey,
    withdrawer_share_account: &Pubkey,
    amount: u64,
) -> Instruction {
    build(
        program_id,
        vault::accounts::Withdraw {
            withdrawer: *withdrawer,
            vault: accounts.vault,
            user_position: user_position_address(program_id, &accounts.vault, withdrawer).0,
            collateral_mint: accounts.collateral_mint,
            share_mint: accounts.share_mint,
            withdrawer_share_account: *withdrawer_share_account,
            withdrawer_collateral_account: accounts.collateral_account_of(withdrawer),
            vault_collateral_account: accounts.vault_collateral_account(),
            token_program: accounts.token_program,
            associated_token_program: anchor_spl::associated_token::ID,
            system_program: solana_sdk::system_program::ID,
        },
        vault::instruction::Withdraw { amount },
    )
}
