use anchor_lang::{
    prelude::{AccountInfo, CpiContext},
    Result,
};

use anchor_spl::token_interface;

/// Mints vault shares, signed by the vault PDA which is the share mint authority.
pub fn mint_shares<'info>(
    token_program: AccountInfo<'info>,
    share_mint: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    recipient_share_account: AccountInfo<'info>,
    vault_signer_seeds: &[&[&[u8]]],
    shares: u64,
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program,
            token_interface::MintTo {
                mint: share_mint,
                to: recipient_share_account,
                authority: vault,
            },
            vault_signer_seeds,
        ),
        shares,
    )
}

/// Burns shares from an account owned by the signing `owner`.
pub fn burn_shares<'info>(
    token_program: AccountInfo<'info>,
    share_mint: AccountInfo<'info>,
    owner_share_account: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    shares: u64,
) -> Result<()> {
    token_interface::burn(
        CpiContext::new(
            token_program,
            token_interface::Burn {
                mint: share_mint,
                from: owner_share_account,
                authority: owner,
            },
        ),
        shares,
    )
}
