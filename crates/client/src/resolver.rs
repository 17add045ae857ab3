//! Idempotent lookup-or-create of token sub-accounts

use anchor_lang::AccountDeserialize;
use anchor_spl::token_interface::{Mint, TokenAccount};
use solana_sdk::{
    account::Account,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use tracing::{debug, warn};

use crate::{
    connection::LedgerConnection,
    errors::{ClientError, ClientResult},
    pda::token_account_address,
};

/// Number of create attempts before giving up on a missing token account.
pub const MAX_RESOLVE_ATTEMPTS: usize = 3;

/// Returns the token program owning `mint`, failing if the account is not an initialized mint.
pub fn mint_token_program<C: LedgerConnection + ?Sized>(
    connection: &C,
    mint: &Pubkey,
) -> ClientResult<Pubkey> {
    let account = connection
        .get_account(mint)?
        .ok_or_else(|| ClientError::ResolutionFailed(format!("mint {mint} does not exist")))?;

    if account.owner != anchor_spl::token::ID && account.owner != anchor_spl::token_2022::ID {
        return Err(ClientError::ResolutionFailed(format!(
            "{mint} is not owned by a token program"
        )));
    }

    Mint::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| ClientError::ResolutionFailed(format!("{mint} is not a mint: {e}")))?;

    Ok(account.owner)
}

fn verify_token_account(
    address: &Pubkey,
    account: &Account,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> ClientResult<()> {
    if account.owner != *token_program {
        return Err(ClientError::ResolutionFailed(format!(
            "{address} is not owned by {token_program}"
        )));
    }

    let token_account = TokenAccount::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| ClientError::ResolutionFailed(format!("{address} is not a token account: {e}")))?;

    if token_account.owner != *owner || token_account.mint != *mint {
        return Err(ClientError::ResolutionFailed(format!(
            "{address} belongs to owner {} and mint {}",
            token_account.owner, token_account.mint
        )));
    }

    Ok(())
}

/// Returns the canonical token account of `owner` for `mint`, creating it if absent.
///
/// A failed create is not fatal: another party may have created the account
/// concurrently, so existence is re-checked before the error is surfaced.
pub fn resolve_or_create<C: LedgerConnection + ?Sized>(
    connection: &mut C,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> ClientResult<Pubkey> {
    if *owner == Pubkey::default() {
        return Err(ClientError::ResolutionFailed(
            "owner is the default address".to_string(),
        ));
    }

    if *mint == Pubkey::default() {
        return Err(ClientError::ResolutionFailed(
            "mint is the default address".to_string(),
        ));
    }

    let token_program = mint_token_program(connection, mint)?;
    let address = token_account_address(owner, mint, &token_program);

    let mut last_error = None;
    for attempt in 1..=MAX_RESOLVE_ATTEMPTS {
        if let Some(account) = connection.get_account(&address)? {
            verify_token_account(&address, &account, owner, mint, &token_program)?;
            return Ok(address);
        }

        let ix = create_associated_token_account_idempotent(
            &payer.pubkey(),
            owner,
            mint,
            &token_program,
        );

        match connection.send_instructions(&[ix], &[payer]) {
            Ok(()) => debug!(%address, %owner, %mint, "created token account"),
            Err(err) => {
                warn!(attempt, %address, error = %err, "token account creation failed, re-checking");
                last_error = Some(err);
            }
        }
    }

    if let Some(account) = connection.get_account(&address)? {
        verify_token_account(&address, &account, owner, mint, &token_program)?;
        return Ok(address);
    }

    Err(last_error.unwrap_or_else(|| {
        ClientError::ResolutionFailed(format!("token account {address} is still missing"))
    }))
}
