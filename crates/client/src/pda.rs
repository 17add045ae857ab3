//! Deterministic addresses for every account the vault program touches

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;
use vault::state::seeds::{
    GLOBAL_REGISTRY_SEED, SHARE_MINT_SEED, USER_POSITION_SEED, VAULT_SEED,
};

pub fn registry_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_REGISTRY_SEED], program_id)
}

pub fn vault_address(program_id: &Pubkey, vault_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, &vault_id.to_le_bytes()], program_id)
}

pub fn share_mint_address(program_id: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SHARE_MINT_SEED, vault.as_ref()], program_id)
}

pub fn user_position_address(program_id: &Pubkey, vault: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_POSITION_SEED, vault.as_ref(), owner.as_ref()],
        program_id,
    )
}

/// Canonical token account of `owner` for `mint` under `token_program`.
pub fn token_account_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
