use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::*;
use crate::invokes::*;
use crate::state::*;
use crate::utils::helpers::{convert_to_assets, convert_to_shares_round_up};

use library::{structs::TokenTransferParams, token::*};

fn execute_withdraw(ctx: Context<Withdraw>, assets: u64) -> Result<u64> {
    ctx.accounts.vault.ensure_active()?;

    if assets == 0 {
        return Err(ErrorCodes::VaultInvalidAmount.into());
    }

    let shares_to_burn = convert_to_shares_round_up(assets)?;

    if ctx.accounts.withdrawer_share_account.amount < shares_to_burn {
        return Err(ErrorCodes::VaultInsufficientShares.into());
    }

    if ctx.accounts.vault.collateral_balance < assets
        || ctx.accounts.vault_collateral_account.amount < assets
    {
        return Err(ErrorCodes::VaultInsufficientFunds.into());
    }

    // shares are burned before any collateral leaves the vault
    burn_shares(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.withdrawer_share_account.to_account_info(),
        ctx.accounts.withdrawer.to_account_info(),
        shares_to_burn,
    )?;

    let id_bytes = ctx.accounts.vault.id_bytes();
    let bump = [ctx.accounts.vault.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &id_bytes, &bump]];

    transfer_spl_tokens(TokenTransferParams {
        source: ctx.accounts.vault_collateral_account.to_account_info(),
        destination: ctx.accounts.withdrawer_collateral_account.to_account_info(),
        authority: ctx.accounts.vault.to_account_info(),
        amount: assets,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: Some(signer_seeds),
        mint: &ctx.accounts.collateral_mint,
    })?;

    let vault_key = ctx.accounts.vault.key();
    let withdrawer_key = ctx.accounts.withdrawer.key();

    let vault = &mut ctx.accounts.vault;
    vault.record_withdraw(assets)?;

    let position = &mut ctx.accounts.user_position;
    position.init_if_needed(vault_key, withdrawer_key, ctx.bumps.user_position);
    position.record_withdraw(assets)?;

    emit!(LogWithdraw {
        vault_id: vault.id,
        withdrawer: withdrawer_key,
        assets,
        shares_burned: shares_to_burn,
        collateral_balance: vault.collateral_balance,
    });

    Ok(assets)
}

/// If `assets` equals u64::MAX the withdrawer's whole share balance is redeemed.
pub fn withdraw_internal(ctx: Context<Withdraw>, assets: u64) -> Result<u64> {
    let mut assets_to_withdraw = assets;

    if assets == u64::MAX {
        let share_balance = balance_of(&ctx.accounts.withdrawer_share_account.to_account_info())?;
        assets_to_withdraw = convert_to_assets(share_balance)?;
    }

    execute_withdraw(ctx, assets_to_withdraw)
}
