use anchor_lang::prelude::*;

use crate::state::context::*;
use crate::utils::{deposit::deposit_internal, withdraw::withdraw_internal};

///////////////////////////////////////////////////////////////
//                            DEPOSIT
///////////////////////////////////////////////////////////////

/// @notice Moves `amount` collateral into the vault and mints the same number of shares.
///         If `amount` equals u64::MAX then the whole collateral balance of `depositor` is deposited.
/// @return shares minted
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    let shares_minted = deposit_internal(ctx, amount)?;

    Ok(shares_minted)
}

///////////////////////////////////////////////////////////////
//                            WITHDRAW
///////////////////////////////////////////////////////////////

/// @notice Burns shares and releases `amount` collateral to the withdrawer.
///         If `amount` equals u64::MAX then the whole share balance of `withdrawer` is redeemed.
/// @return collateral withdrawn
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
    let assets = withdraw_internal(ctx, amount)?;

    Ok(assets)
}
