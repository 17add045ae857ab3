use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::*;
use crate::invokes::*;
use crate::state::*;
use crate::utils::helpers::{convert_to_shares, ensure_received};

use library::{structs::TokenTransferParams, token::*};

fn execute_deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    ctx.accounts.vault.ensure_active()?;

    if amount == 0 {
        return Err(ErrorCodes::VaultInvalidAmount.into());
    }

    if ctx.accounts.depositor_collateral_account.amount < amount {
        return Err(ErrorCodes::VaultInsufficientFunds.into());
    }

    ctx.accounts.vault.check_deposit_cap(amount)?;

    let shares_minted = convert_to_shares(amount)?;
    if shares_minted == 0 {
        return Err(ErrorCodes::VaultInvalidAmount.into());
    }

    let collateral_before = ctx.accounts.vault_collateral_account.amount;

    // collateral in first, shares out second, both in this instruction
    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.depositor_collateral_account.to_account_info(),
        destination: ctx.accounts.vault_collateral_account.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
        amount,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: None,
        mint: &ctx.accounts.collateral_mint,
    })?;

    ctx.accounts.vault_collateral_account.reload()?;
    ensure_received(
        collateral_before,
        ctx.accounts.vault_collateral_account.amount,
        amount,
    )?;

    let id_bytes = ctx.accounts.vault.id_bytes();
    let bump = [ctx.accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &id_bytes, &bump]];

    mint_shares(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.depositor_share_account.to_account_info(),
        signer_seeds,
        shares_minted,
    )?;

    let vault_key = ctx.accounts.vault.key();
    let depositor_key = ctx.accounts.depositor.key();

    let vault = &mut ctx.accounts.vault;
    vault.record_deposit(amount)?;

    let position = &mut ctx.accounts.user_position;
    position.init_if_needed(vault_key, depositor_key, ctx.bumps.user_position);
    position.record_deposit(amount)?;

    emit!(LogDeposit {
        vault_id: vault.id,
        depositor: depositor_key,
        assets: amount,
        shares_minted,
        collateral_balance: vault.collateral_balance,
    });

    Ok(shares_minted)
}

/// If `amount` equals u64::MAX the depositor's whole collateral balance is deposited.
pub fn deposit_internal(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    let mut amount_to_deposit = amount;

    if amount == u64::MAX {
        amount_to_deposit =
            balance_of(&ctx.accounts.depositor_collateral_account.to_account_info())?;
    }

    execute_deposit(ctx, amount_to_deposit)
}
