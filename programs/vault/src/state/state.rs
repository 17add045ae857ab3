use anchor_lang::prelude::*;

use crate::constants::{FIRST_VAULT_ID, UNCAPPED_DEPOSIT};
use crate::errors::ErrorCodes;
use library::math::safe_math::*;

#[account]
#[derive(InitSpace)]
pub struct GlobalRegistry {
    pub authority: Pubkey, // account that initialized the registry
    pub next_vault_id: u64,
    pub total_vaults: u64,
    pub initialized: bool,
    pub bump: u8,
}

impl GlobalRegistry {
    pub fn init(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        if self.initialized {
            return Err(ErrorCodes::VaultAlreadyInitialized.into());
        }

        if authority == Pubkey::default() {
            return Err(ErrorCodes::VaultInvalidParams.into());
        }

        self.authority = authority;
        self.next_vault_id = FIRST_VAULT_ID;
        self.total_vaults = 0;
        self.initialized = true;
        self.bump = bump;

        Ok(())
    }

    /// Hands out the current id and advances the counter. Must run in the same
    /// instruction that writes the vault at the address derived from that id.
    pub fn allocate_vault_id(&mut self) -> Result<u64> {
        if !self.initialized {
            return Err(ErrorCodes::VaultInvalidParams.into());
        }

        let vault_id = self.next_vault_id;
        self.next_vault_id = vault_id.safe_add(1)?;
        self.total_vaults = self.total_vaults.safe_add(1)?;

        Ok(vault_id)
    }

    pub fn set_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        if new_authority == Pubkey::default() {
            return Err(ErrorCodes::VaultInvalidParams.into());
        }

        self.authority = new_authority;
        Ok(())
    }
}

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum VaultStatus {
    #[default]
    Active,
    Frozen,
    Closed,
}

#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub id: u64,
    pub creator: Pubkey, // only principal allowed to freeze, unfreeze and close
    pub collateral_mint: Pubkey,
    pub share_mint: Pubkey,
    pub status: VaultStatus,

    /// @dev collateral custodied in smallest units, always equal to the share supply
    pub collateral_balance: u64,
    /// @dev 0 means uncapped
    pub max_deposit: u64,

    pub created_at: i64,
    pub bump: u8,
    pub share_mint_bump: u8,
}

pub struct VaultInitParams {
    pub id: u64,
    pub creator: Pubkey,
    pub collateral_mint: Pubkey,
    pub share_mint: Pubkey,
    pub max_deposit: u64,
    pub created_at: i64,
    pub bump: u8,
    pub share_mint_bump: u8,
}

impl Vault {
    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    pub fn init(&mut self, params: VaultInitParams) -> Result<()> {
        if self.is_initialized() {
            return Err(ErrorCodes::VaultAlreadyExists.into());
        }

        if params.creator == Pubkey::default() {
            return Err(ErrorCodes::VaultInvalidParams.into());
        }

        self.id = params.id;
        self.creator = params.creator;
        self.collateral_mint = params.collateral_mint;
        self.share_mint = params.share_mint;
        self.status = VaultStatus::Active;
        self.collateral_balance = 0;
        self.max_deposit = params.max_deposit;
        self.created_at = params.created_at;
        self.bump = params.bump;
        self.share_mint_bump = params.share_mint_bump;

        Ok(())
    }

    pub fn id_bytes(&self) -> [u8; 8] {
        self.id.to_le_bytes()
    }

    fn only_creator(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.creator {
            return Err(ErrorCodes::VaultUnauthorized.into());
        }
        Ok(())
    }

    pub fn freeze(&mut self, caller: &Pubkey) -> Result<()> {
        self.only_creator(caller)?;

        match self.status {
            VaultStatus::Active => {
                self.status = VaultStatus::Frozen;
                Ok(())
            }
            VaultStatus::Frozen => Err(ErrorCodes::VaultFrozen.into()),
            VaultStatus::Closed => Err(ErrorCodes::VaultClosed.into()),
        }
    }

    pub fn unfreeze(&mut self, caller: &Pubkey) -> Result<()> {
        self.only_creator(caller)?;

        match self.status {
            VaultStatus::Frozen => {
                self.status = VaultStatus::Active;
                Ok(())
            }
            VaultStatus::Active => Err(ErrorCodes::VaultUnfrozen.into()),
            VaultStatus::Closed => Err(ErrorCodes::VaultClosed.into()),
        }
    }

    /// Terminal. Collateral left in the vault stays locked.
    pub fn close(&mut self, caller: &Pubkey) -> Result<()> {
        self.only_creator(caller)?;

        if self.status == VaultStatus::Closed {
            return Err(ErrorCodes::VaultClosed.into());
        }

        self.status = VaultStatus::Closed;
        Ok(())
    }

    pub fn set_max_deposit(&mut self, caller: &Pubkey, max_deposit: u64) -> Result<()> {
        self.only_creator(caller)?;

        if self.status == VaultStatus::Closed {
            return Err(ErrorCodes::VaultClosed.into());
        }

        self.max_deposit = max_deposit;
        Ok(())
    }

    /// Fund movement is only allowed while Active.
    pub fn ensure_active(&self) -> Result<()> {
        match self.status {
            VaultStatus::Active => Ok(()),
            VaultStatus::Frozen => Err(ErrorCodes::VaultFrozen.into()),
            VaultStatus::Closed => Err(ErrorCodes::VaultClosed.into()),
        }
    }

    pub fn check_deposit_cap(&self, amount: u64) -> Result<()> {
        let new_balance = self.collateral_balance.safe_add(amount)?;

        if self.max_deposit != UNCAPPED_DEPOSIT && new_balance > self.max_deposit {
            return Err(ErrorCodes::VaultDepositCapExceeded.into());
        }
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.check_deposit_cap(amount)?;
        self.collateral_balance = self.collateral_balance.safe_add(amount)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        if amount > self.collateral_balance {
            return Err(ErrorCodes::VaultInsufficientFunds.into());
        }

        self.collateral_balance = self.collateral_balance.safe_sub(amount)?;
        Ok(())
    }
}

/// Per (vault, owner) running totals. Never consulted for authorization.
#[account]
#[derive(InitSpace)]
pub struct UserPosition {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl UserPosition {
    pub fn init_if_needed(&mut self, vault: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.vault = vault;
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self.total_deposited.safe_add(amount)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        self.total_withdrawn = self.total_withdrawn.safe_add(amount)?;
        Ok(())
    }
}
