//! Vaults over Token-2022 collateral: share mint and token accounts follow the collateral program.

#[cfg(test)]
mod tests {
    use crate::vault::fixture::*;
    use anchor_spl::token_2022::{self, spl_token_2022};
    use spl_token_2022::extension::ExtensionType;
    use vault_client::{
        instructions::{create_vault_ix, deposit_ix, VaultAccounts},
        ClientError,
    };
    use vault_test_framework::prelude::*;

    fn setup_token_2022_fixture() -> VaultFixture {
        let mut fixture = VaultFixture::with_collateral_program(&token_2022::ID)
            .expect("Failed to create vault fixture");
        fixture.setup().expect("Failed to setup vault fixture");
        fixture
    }

    #[test]
    fn test_create_vault_with_token_2022_collateral() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();

        let vault_id = fixture.create_vault(&admin).unwrap();
        let share_mint = fixture.get_share_mint(vault_id);

        let info = fixture.vm_ref().get_mint_info(&share_mint).unwrap();
        assert_eq!(info.token_program, token_2022::ID);
        assert_eq!(info.decimals, COLLATERAL_DECIMALS);
        assert_eq!(info.mint_authority, Some(fixture.get_vault(vault_id)));
        assert_eq!(info.supply, 0);

        fixture
            .vm_ref()
            .assert_account_owner(&share_mint, &token_2022::ID);
    }

    #[test]
    fn test_deposit_and_withdraw_token_2022() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        let vault_id = fixture.create_vault(&admin).unwrap();

        fixture.deposit(&alice, vault_id, 2_000).unwrap();

        let vault = fixture.get_vault(vault_id);
        let vault_collateral = fixture.vm_ref().get_ata(&vault, &fixture.collateral_mint);
        fixture
            .vm_ref()
            .assert_account_owner(&vault_collateral, &token_2022::ID);

        assert_eq!(fixture.vault(vault_id).collateral_balance, 2_000);
        assert_eq!(fixture.vault_holdings(vault_id), 2_000);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 2_000);

        fixture.withdraw(&alice, vault_id, 1_500).unwrap();

        assert_eq!(fixture.vault(vault_id).collateral_balance, 500);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 500);
        assert_eq!(
            fixture.collateral_balance_of(&alice.pubkey()),
            INITIAL_COLLATERAL - 500
        );
    }

    #[test]
    fn test_token_2022_withdraw_more_than_shares_reverts() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        let vault_id = fixture.create_vault(&admin).unwrap();
        fixture.deposit(&bob, vault_id, 100).unwrap();

        fixture.expect_revert_with("VAULT_INSUFFICIENT_SHARES", |f| {
            f.withdraw(&bob, vault_id, 101)
        });
    }

    fn create_vault_with_extensions(fixture: &mut VaultFixture, extensions: &[ExtensionType]) {
        let admin = fixture.admin.insecure_clone();
        let mint = fixture
            .vm()
            .create_mint_with_extensions(&admin.pubkey(), COLLATERAL_DECIMALS, extensions)
            .unwrap();

        fixture.expect_revert_with("LIBRARY_UNSUPPORTED_TOKEN_EXTENSION", |f| {
            f.client.create_vault(&admin, &mint, 0)
        });
    }

    #[test]
    fn test_transfer_fee_mint_rejected() {
        let mut fixture = setup_token_2022_fixture();

        create_vault_with_extensions(&mut fixture, &[ExtensionType::TransferFeeConfig]);

        assert_eq!(fixture.registry().total_vaults, 0);
        assert_eq!(fixture.registry().next_vault_id, 1);
    }

    #[test]
    fn test_transfer_hook_mint_rejected() {
        let mut fixture = setup_token_2022_fixture();

        create_vault_with_extensions(&mut fixture, &[ExtensionType::TransferHook]);
        create_vault_with_extensions(
            &mut fixture,
            &[ExtensionType::MintCloseAuthority, ExtensionType::TransferHook],
        );

        assert_eq!(fixture.registry().total_vaults, 0);
    }

    #[test]
    fn test_mint_close_authority_accepted() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        let mint = fixture
            .vm()
            .create_mint_with_extensions(
                &admin.pubkey(),
                COLLATERAL_DECIMALS,
                &[ExtensionType::MintCloseAuthority],
            )
            .unwrap();
        fixture.vm().mint_tokens(&mint, &alice.pubkey(), 5_000).unwrap();

        let vault_id = fixture.client.create_vault(&admin, &mint, 0).unwrap();
        fixture.deposit(&alice, vault_id, 5_000).unwrap();

        let vault = fixture.get_vault(vault_id);
        assert_eq!(fixture.vault(vault_id).collateral_balance, 5_000);
        assert_eq!(fixture.vm_ref().token_balance(&vault, &mint), 5_000);
        assert_eq!(fixture.vm_ref().token_balance(&alice.pubkey(), &mint), 0);
    }

    #[test]
    fn test_token_2022_native_mint_rejected() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();
        let native_mint = spl_token_2022::native_mint::ID;

        fixture
            .vm()
            .create_mint_at(&native_mint, &admin.pubkey(), 9, &token_2022::ID)
            .unwrap();

        fixture.expect_revert_with("LIBRARY_INVALID_TOKEN_MINT", |f| {
            f.client.create_vault(&admin, &native_mint, 0)
        });
        assert_eq!(fixture.registry().total_vaults, 0);
    }

    #[test]
    fn test_mint_outside_token_programs_rejected() {
        let mut fixture = setup_token_2022_fixture();
        let admin = fixture.admin.insecure_clone();
        let foreign_program = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        // valid mint layout, wrong owner
        fixture
            .vm()
            .create_mint_at(&mint, &admin.pubkey(), COLLATERAL_DECIMALS, &foreign_program)
            .unwrap();

        let err = fixture.client.create_vault(&admin, &mint, 0).unwrap_err();
        assert!(matches!(err, ClientError::ResolutionFailed(_)));

        // sent anyway, the program refuses the account
        let ix = create_vault_ix(
            &VAULT_PROGRAM_ID,
            &admin.pubkey(),
            1,
            &mint,
            &foreign_program,
            0,
        );
        fixture.vm().prank(admin.pubkey());
        assert!(fixture.vm().execute_as_prank(ix).is_err());

        assert_eq!(fixture.registry().total_vaults, 0);
    }

    #[test]
    fn test_deposit_with_foreign_collateral_mint_reverts() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        let vault_id = fixture.create_vault(&admin).unwrap();
        fixture.deposit(&alice, vault_id, 1_000).unwrap();

        let foreign_mint = fixture
            .vm()
            .create_mint(&admin.pubkey(), COLLATERAL_DECIMALS)
            .unwrap();
        fixture
            .vm()
            .mint_tokens(&foreign_mint, &alice.pubkey(), 1_000)
            .unwrap();

        let accounts = VaultAccounts::new(&VAULT_PROGRAM_ID, vault_id, &foreign_mint, &spl_token::ID);
        let source = accounts.collateral_account_of(&alice.pubkey());
        let ix = deposit_ix(&VAULT_PROGRAM_ID, &accounts, &alice.pubkey(), &source, 1_000);

        fixture.vm().prank(alice.pubkey());
        fixture
            .vm()
            .execute_as_prank(ix)
            .expect_revert_containing(fixture.vm_ref(), "VAULT_COLLATERAL_MISMATCH");

        assert_eq!(fixture.vault(vault_id).collateral_balance, 1_000);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 1_000);
        assert_eq!(
            fixture.vm_ref().token_balance(&alice.pubkey(), &foreign_mint),
            1_000
        );
    }
}
