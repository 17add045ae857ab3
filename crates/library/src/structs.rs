use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Accounts and amount for a `transfer_checked` CPI.
pub struct TokenTransferParams<'a, 'info> {
    pub source: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    /// Owner of `source`, or the PDA signing through `signer_seeds`
    pub authority: AccountInfo<'info>,
    pub amount: u64,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
}
