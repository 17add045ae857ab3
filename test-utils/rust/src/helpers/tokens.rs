use crate::core::{accounts::AccountManager, vm::Vm};
use crate::errors::{Result, VmError};
use anchor_lang::AccountDeserialize;
use anchor_spl::token_2022::spl_token_2022::{
    self,
    extension::{
        mint_close_authority::MintCloseAuthority, transfer_fee::TransferFeeConfig,
        transfer_hook::TransferHook, BaseStateWithExtensionsMut, ExtensionType,
        StateWithExtensionsMut,
    },
};
use anchor_spl::token_interface::{Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount};
use solana_sdk::{
    account::Account,
    program_option::COption,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_token::solana_program::program_pack::Pack;
use spl_token::state::{Account as TokenAccount, Mint};

/// Token management trait. Every helper follows the token program that owns the mint.
pub trait TokenHelper {
    /// Create a new SPL token mint
    fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Result<Pubkey>;

    /// Create a mint owned by `token_program` (SPL Token or Token-2022)
    fn create_mint_with_program(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<Pubkey>;

    /// Create a Token-2022 mint carrying `extensions` in their default configuration
    fn create_mint_with_extensions(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        extensions: &[ExtensionType],
    ) -> Result<Pubkey>;

    /// Write a mint at a fixed address, e.g. a well-known native mint
    fn create_mint_at(
        &mut self,
        address: &Pubkey,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<()>;

    /// Set the balance of the owner's associated token account, creating it if needed
    fn mint_tokens(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<()>;

    /// Get token balance for a user, zero when the account does not exist
    fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64;

    fn get_ata(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey;

    fn ata_exists(&self, owner: &Pubkey, mint: &Pubkey) -> bool;

    fn get_mint_info(&self, mint: &Pubkey) -> Result<MintInfo>;
}

pub struct MintInfo {
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: Option<Pubkey>,
    pub token_program: Pubkey,
}

fn token_error(err: impl std::fmt::Display) -> VmError {
    VmError::TokenError(err.to_string())
}

impl Vm {
    /// Token program owning `mint`, defaulting to SPL Token for unknown mints
    fn token_program_of(&self, mint: &Pubkey) -> Pubkey {
        self.get_account(mint)
            .map(|account| account.owner)
            .unwrap_or(spl_token::ID)
    }

    fn write_token_owned(&mut self, address: &Pubkey, data: Vec<u8>, owner: Pubkey) -> Result<()> {
        let account = Account {
            lamports: self.rent().minimum_balance(data.len()),
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.set_account(address, account)
    }
}

impl TokenHelper for Vm {
    fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Result<Pubkey> {
        self.create_mint_with_program(authority, decimals, &spl_token::ID)
    }

    fn create_mint_with_program(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<Pubkey> {
        let mint = Keypair::new().pubkey();
        self.create_mint_at(&mint, authority, decimals, token_program)?;
        Ok(mint)
    }

    fn create_mint_with_extensions(
        &mut self,
        authority: &Pubkey,
        decimals: u8,
        extensions: &[ExtensionType],
    ) -> Result<Pubkey> {
        let len = ExtensionType::try_calculate_account_len::<spl_token_2022::state::Mint>(
            extensions,
        )
        .map_err(token_error)?;
        let mut data = vec![0u8; len];

        let mut state =
            StateWithExtensionsMut::<spl_token_2022::state::Mint>::unpack_uninitialized(&mut data)
                .map_err(token_error)?;

        for extension in extensions {
            match extension {
                ExtensionType::TransferFeeConfig => {
                    state
                        .init_extension::<TransferFeeConfig>(true)
                        .map_err(token_error)?;
                }
                ExtensionType::TransferHook => {
                    state
                        .init_extension::<TransferHook>(true)
                        .map_err(token_error)?;
                }
                ExtensionType::MintCloseAuthority => {
                    state
                        .init_extension::<MintCloseAuthority>(true)
                        .map_err(token_error)?;
                }
                other => {
                    return Err(VmError::TokenError(format!(
                        "mint extension {:?} is not supported",
                        other
                    )))
                }
            }
        }

        state.base = spl_token_2022::state::Mint {
            mint_authority: COption::Some(*authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        state.pack_base();
        state.init_account_type().map_err(token_error)?;

        let mint = Keypair::new().pubkey();
        self.write_token_owned(&mint, data, spl_token_2022::ID)?;
        Ok(mint)
    }

    fn create_mint_at(
        &mut self,
        address: &Pubkey,
        authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<()> {
        // base mint layout is shared by both token programs
        let mut data = vec![0u8; Mint::LEN];

        let mint = Mint {
            mint_authority: COption::Some(*authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        Mint::pack(mint, &mut data).map_err(token_error)?;

        self.write_token_owned(address, data, *token_program)
    }

    fn mint_tokens(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<()> {
        let token_program = self.token_program_of(mint);
        let ata = get_associated_token_address_with_program_id(owner, mint, &token_program);

        let mut data = vec![0u8; TokenAccount::LEN];

        let token_account = TokenAccount {
            mint: *mint,
            owner: *owner,
            amount,
            delegate: COption::None,
            state: spl_token::state::AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        TokenAccount::pack(token_account, &mut data).map_err(token_error)?;

        self.write_token_owned(&ata, data, token_program)
    }

    fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64 {
        self.get_account(&self.get_ata(owner, mint))
            .and_then(|account| {
                InterfaceTokenAccount::try_deserialize(&mut account.data.as_slice()).ok()
            })
            .map(|token_account| token_account.amount)
            .unwrap_or(0)
    }

    fn get_ata(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(owner, mint, &self.token_program_of(mint))
    }

    fn ata_exists(&self, owner: &Pubkey, mint: &Pubkey) -> bool {
        self.account_exists(&self.get_ata(owner, mint))
    }

    fn get_mint_info(&self, mint: &Pubkey) -> Result<MintInfo> {
        let account = self
            .get_account(mint)
            .ok_or_else(|| VmError::AccountNotFound(mint.to_string()))?;

        let mint_data = InterfaceMint::try_deserialize(&mut account.data.as_slice())
            .map_err(|e| VmError::TokenError(e.to_string()))?;

        Ok(MintInfo {
            supply: mint_data.supply,
            decimals: mint_data.decimals,
            mint_authority: mint_data.mint_authority.into(),
            token_program: account.owner,
        })
    }
}
