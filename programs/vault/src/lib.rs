use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod invokes;
pub mod module;
pub mod state;
pub mod utils;

use crate::module::*;
use crate::state::context::*;

#[cfg(feature = "staging")]
declare_id!("4ccQd4R1Z8yrb7am6qHyB6TPAwMD2Gp4cxhz1ZShHoQR");

#[cfg(not(feature = "staging"))]
declare_id!("9qygbwmh55Af8efyfZxs2wE4iNwhbf5ac6xtcTV1QTwB");

#[program]
pub mod vault {
    use super::*;

    /***********************************|
    |          Registry Module          |
    |__________________________________*/

    pub fn init_registry(ctx: Context<InitRegistry>) -> Result<()> {
        admin::init_registry(ctx)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        admin::update_authority(ctx, new_authority)
    }

    /***********************************|
    |           Vault Module            |
    |__________________________________*/

    pub fn create_vault(ctx: Context<CreateVault>, max_deposit: u64) -> Result<u64> {
        admin::create_vault(ctx, max_deposit)
    }

    pub fn freeze_vault(ctx: Context<UpdateVault>) -> Result<()> {
        admin::freeze_vault(ctx)
    }

    pub fn unfreeze_vault(ctx: Context<UpdateVault>) -> Result<()> {
        admin::unfreeze_vault(ctx)
    }

    pub fn close_vault(ctx: Context<UpdateVault>) -> Result<()> {
        admin::close_vault(ctx)
    }

    pub fn set_max_deposit(ctx: Context<UpdateVault>, max_deposit: u64) -> Result<()> {
        admin::set_max_deposit(ctx, max_deposit)
    }

    /***********************************|
    |            User Module            |
    |__________________________________*/

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
        user::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
        user::withdraw(ctx, amount)
    }
}
