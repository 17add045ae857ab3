use anchor_lang::prelude::*;

use crate::constants::{SHARE_EXCHANGE_RATE, SHARE_RATE_PRECISION};
use crate::errors::ErrorCodes;

use library::math::{casting::*, safe_math::*};

/// Shares minted for `assets` collateral units, rounded down.
pub fn convert_to_shares(assets: u64) -> Result<u64> {
    let shares = assets
        .cast::<u128>()?
        .safe_mul(SHARE_EXCHANGE_RATE)?
        .safe_div(SHARE_RATE_PRECISION)?
        .cast::<u64>()?;

    Ok(shares)
}

/// Shares burned to release `assets` collateral units, rounded up so a
/// withdrawal never takes out more than its shares are worth.
pub fn convert_to_shares_round_up(assets: u64) -> Result<u64> {
    let shares = assets
        .cast::<u128>()?
        .safe_mul(SHARE_EXCHANGE_RATE)?
        .safe_div_ceil(SHARE_RATE_PRECISION)?
        .cast::<u64>()?;

    Ok(shares)
}

/// Collateral units redeemable for `shares`, rounded down.
pub fn convert_to_assets(shares: u64) -> Result<u64> {
    let assets = shares
        .cast::<u128>()?
        .safe_mul(SHARE_RATE_PRECISION)?
        .safe_div(SHARE_EXCHANGE_RATE)?
        .cast::<u64>()?;

    Ok(assets)
}

/// Fails unless the vault's collateral account grew by exactly `amount`.
pub fn ensure_received(balance_before: u64, balance_after: u64, amount: u64) -> Result<()> {
    if balance_after.checked_sub(balance_before) != Some(amount) {
        return Err(ErrorCodes::VaultTransferAmountMismatch.into());
    }
    Ok(())
}
