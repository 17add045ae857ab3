use anchor_lang::prelude::*;

use crate::{errors::ErrorCodes, structs::TokenTransferParams};
use anchor_spl::token;
use anchor_spl::token_interface::{self, Mint, TransferChecked};
use anchor_spl::{
    token::spl_token,
    token_2022::spl_token_2022,
    token_interface::spl_token_2022::extension::{
        BaseStateWithExtensions, ExtensionType, StateWithExtensions,
    },
};

pub fn balance_of(token_account: &AccountInfo) -> Result<u64> {
    let amount = token::accessor::amount(token_account)?;
    Ok(amount)
}

pub fn transfer_spl_tokens(params: TokenTransferParams) -> Result<()> {
    let TokenTransferParams {
        source,
        destination,
        authority,
        amount,
        token_program,
        signer_seeds,
        mint,
    } = params;

    let transfer_accounts = TransferChecked {
        from: source,
        to: destination,
        authority,
        mint: mint.to_account_info(),
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, transfer_accounts, seeds),
        None => CpiContext::new(token_program, transfer_accounts),
    };

    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

// Extensions that leave every transfer moving exactly the requested amount.
const ALLOWED_COLLATERAL_EXTENSIONS: &[ExtensionType] = &[
    ExtensionType::MetadataPointer,
    ExtensionType::TokenMetadata,
    ExtensionType::MintCloseAuthority,
];

fn ensure_supported_extensions(extensions: &[ExtensionType]) -> Result<()> {
    if extensions
        .iter()
        .any(|extension| !ALLOWED_COLLATERAL_EXTENSIONS.contains(extension))
    {
        return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
    }
    Ok(())
}

fn validate_token_2022_extensions(mint: &AccountInfo) -> Result<()> {
    let mint_data = mint.data.borrow();
    let mint = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&mint_data)?;

    ensure_supported_extensions(&mint.get_extension_types()?)
}

/// Rejects collateral mints whose transfers could move a different amount than requested.
pub fn validate_collateral_mint(mint: &InterfaceAccount<'_, Mint>) -> Result<()> {
    let mint_info = mint.to_account_info();

    if mint_info.owner == &spl_token::ID {
        return Ok(());
    }

    if mint_info.owner != &spl_token_2022::ID {
        return err!(ErrorCodes::LibraryInvalidTokenMint);
    }

    // wrapped SOL under token-2022 is not a supported collateral
    if spl_token_2022::native_mint::check_id(&mint.key()) {
        return err!(ErrorCodes::LibraryInvalidTokenMint);
    }

    validate_token_2022_extensions(&mint_info)
}
