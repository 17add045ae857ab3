use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::events::*;
use crate::state::*;

use library::token::validate_collateral_mint;

pub fn init_registry(ctx: Context<InitRegistry>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let registry = &mut ctx.accounts.global_registry;

    registry.init(authority, ctx.bumps.global_registry)?;

    emit!(LogInitRegistry {
        authority,
        next_vault_id: registry.next_vault_id,
    });

    Ok(())
}

pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
    ctx.accounts.global_registry.set_authority(new_authority)?;

    emit!(LogUpdateAuthority { new_authority });

    Ok(())
}

pub fn create_vault(ctx: Context<CreateVault>, max_deposit: u64) -> Result<u64> {
    validate_collateral_mint(&ctx.accounts.collateral_mint)?;

    if ctx.accounts.vault.is_initialized() {
        return Err(ErrorCodes::VaultAlreadyExists.into());
    }

    let vault_id = ctx.accounts.global_registry.allocate_vault_id()?;

    let vault = &mut ctx.accounts.vault;
    vault.init(VaultInitParams {
        id: vault_id,
        creator: ctx.accounts.creator.key(),
        collateral_mint: ctx.accounts.collateral_mint.key(),
        share_mint: ctx.accounts.share_mint.key(),
        max_deposit,
        created_at: Clock::get()?.unix_timestamp,
        bump: ctx.bumps.vault,
        share_mint_bump: ctx.bumps.share_mint,
    })?;

    emit!(LogCreateVault {
        vault_id,
        vault: vault.key(),
        creator: vault.creator,
        collateral_mint: vault.collateral_mint,
        share_mint: vault.share_mint,
        max_deposit,
    });

    Ok(vault_id)
}

pub fn freeze_vault(ctx: Context<UpdateVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.freeze(&ctx.accounts.signer.key())?;

    emit!(LogFreezeVault { vault_id: vault.id });

    Ok(())
}

pub fn unfreeze_vault(ctx: Context<UpdateVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.unfreeze(&ctx.accounts.signer.key())?;

    emit!(LogUnfreezeVault { vault_id: vault.id });

    Ok(())
}

pub fn close_vault(ctx: Context<UpdateVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    (**vault).close(&ctx.accounts.signer.key())?;

    emit!(LogCloseVault {
        vault_id: vault.id,
        collateral_balance: vault.collateral_balance,
    });

    Ok(())
}

pub fn set_max_deposit(ctx: Context<UpdateVault>, max_deposit: u64) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.set_max_deposit(&ctx.accounts.signer.key(), max_deposit)?;

    emit!(LogUpdateMaxDeposit {
        vault_id: vault.id,
        max_deposit,
    });

    Ok(())
}
