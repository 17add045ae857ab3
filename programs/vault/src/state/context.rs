use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::errors::ErrorCodes;
use crate::state::*;

#[derive(Accounts)]
pub struct InitRegistry<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // init_if_needed so a second call reaches the handler and fails with VaultAlreadyInitialized
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + GlobalRegistry::INIT_SPACE,
        seeds = [GLOBAL_REGISTRY_SEED],
        bump,
    )]
    pub global_registry: Account<'info, GlobalRegistry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    // @dev Only the authority can update the authority
    #[account(address = global_registry.authority @ ErrorCodes::VaultOnlyAuthority)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [GLOBAL_REGISTRY_SEED], bump = global_registry.bump)]
    pub global_registry: Account<'info, GlobalRegistry>,
}

#[derive(Accounts)]
pub struct CreateVault<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(mut, seeds = [GLOBAL_REGISTRY_SEED], bump = global_registry.bump)]
    pub global_registry: Box<Account<'info, GlobalRegistry>>,

    // @dev derived from the id about to be allocated, a stale counter makes the seeds check fail
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, global_registry.next_vault_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(owner = token_program.key())]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = creator,
        seeds = [SHARE_MINT_SEED, vault.key().as_ref()],
        bump,
        mint::decimals = collateral_mint.decimals,
        mint::authority = vault,
        mint::token_program = token_program,
    )]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Creator-signed lifecycle transitions.
#[derive(Accounts)]
pub struct UpdateVault<'info> {
    pub signer: Signer<'info>,

    #[account(mut, seeds = [VAULT_SEED, vault.id.to_le_bytes().as_ref()], bump = vault.bump)]
    pub vault: Account<'info, Vault>,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.id.to_le_bytes().as_ref()],
        bump = vault.bump,
        has_one = collateral_mint @ ErrorCodes::VaultCollateralMismatch,
        has_one = share_mint @ ErrorCodes::VaultResolutionFailed,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + UserPosition::INIT_SPACE,
        seeds = [USER_POSITION_SEED, vault.key().as_ref(), depositor.key().as_ref()],
        bump,
    )]
    pub user_position: Box<Account<'info, UserPosition>>,

    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = depositor,
        token::token_program = token_program
    )]
    pub depositor_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = share_mint,
        associated_token::authority = depositor,
        associated_token::token_program = token_program
    )]
    pub depositor_share_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = collateral_mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program
    )]
    pub vault_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.id.to_le_bytes().as_ref()],
        bump = vault.bump,
        has_one = collateral_mint @ ErrorCodes::VaultCollateralMismatch,
        has_one = share_mint @ ErrorCodes::VaultResolutionFailed,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        space = 8 + UserPosition::INIT_SPACE,
        seeds = [USER_POSITION_SEED, vault.key().as_ref(), withdrawer.key().as_ref()],
        bump,
    )]
    pub user_position: Box<Account<'info, UserPosition>>,

    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = share_mint,
        token::authority = withdrawer,
        token::token_program = token_program
    )]
    pub withdrawer_share_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = collateral_mint,
        associated_token::authority = withdrawer,
        associated_token::token_program = token_program
    )]
    pub withdrawer_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program
    )]
    pub vault_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
