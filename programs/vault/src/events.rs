use anchor_lang::prelude::*;

#[event]
pub struct LogInitRegistry {
    pub authority: Pubkey,
    pub next_vault_id: u64,
}

#[event]
pub struct LogUpdateAuthority {
    pub new_authority: Pubkey,
}

#[event]
pub struct LogCreateVault {
    pub vault_id: u64,
    pub vault: Pubkey,
    pub creator: Pubkey,
    pub collateral_mint: Pubkey,
    pub share_mint: Pubkey,
    pub max_deposit: u64,
}

#[event]
pub struct LogDeposit {
    pub vault_id: u64,
    pub depositor: Pubkey,
    pub assets: u64,
    pub shares_minted: u64,
    pub collateral_balance: u64,
}

#[event]
pub struct LogWithdraw {
    pub vault_id: u64,
    pub withdrawer: Pubkey,
    pub assets: u64,
    pub shares_burned: u64,
    pub collateral_balance: u64,
}

#[event]
pub struct LogFreezeVault {
    pub vault_id: u64,
}

#[event]
pub struct LogUnfreezeVault {
    pub vault_id: u64,
}

#[event]
pub struct LogCloseVault {
    pub vault_id: u64,
    pub collateral_balance: u64,
}

#[event]
pub struct LogUpdateMaxDeposit {
    pub vault_id: u64,
    pub max_deposit: u64,
}
