//! Withdraw tests: shares burned first, collateral released 1:1, exact conservation.

#[cfg(test)]
mod tests {
    use crate::vault::fixture::*;
    use vault::{events::LogWithdraw, state::VaultStatus};
    use vault_test_framework::prelude::*;

    const DEPOSIT_AMOUNT: u64 = 1_000;

    /// Vault 1 with `DEPOSIT_AMOUNT` deposited by alice
    fn setup_with_deposit() -> (VaultFixture, u64) {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        let vault_id = fixture.create_vault(&admin).expect("Failed to create vault");
        fixture
            .deposit(&alice, vault_id, DEPOSIT_AMOUNT)
            .expect("Failed to deposit");

        (fixture, vault_id)
    }

    #[test]
    fn test_withdraw_everything() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();
        let before = fixture.collateral_balance_of(&alice.pubkey());

        fixture.withdraw(&alice, vault_id, DEPOSIT_AMOUNT).unwrap();

        assert_eq!(fixture.vault(vault_id).collateral_balance, 0);
        assert_eq!(fixture.vault_holdings(vault_id), 0);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 0);
        assert_eq!(fixture.share_supply(vault_id), 0);
        fixture.vm_ref().assert_token_balance_changed(
            &alice.pubkey(),
            &fixture.collateral_mint,
            before,
            DEPOSIT_AMOUNT as i64,
        );

        fixture.vm_ref().assert_logs_contain("Instruction: Withdraw");
    }

    #[test]
    fn test_withdraw_emits_event() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();

        fixture.withdraw(&alice, vault_id, 400).unwrap();

        let events = fixture.vm_ref().emitted_events::<LogWithdraw>();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.vault_id, vault_id);
        assert_eq!(event.withdrawer, alice.pubkey());
        assert_eq!(event.assets, 400);
        assert_eq!(event.shares_burned, 400);
        assert_eq!(event.collateral_balance, DEPOSIT_AMOUNT - 400);
    }

    #[test]
    fn test_round_trip_restores_balances() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let bob = fixture.bob.insecure_clone();
        let vault_id = fixture.create_vault(&admin).unwrap();

        for amount in [1, 999, 123_456, INITIAL_COLLATERAL] {
            fixture.deposit(&bob, vault_id, amount).unwrap();
            fixture.withdraw(&bob, vault_id, amount).unwrap();

            assert_eq!(fixture.collateral_balance_of(&bob.pubkey()), INITIAL_COLLATERAL);
            assert_eq!(fixture.shares_of(vault_id, &bob.pubkey()), 0);
            assert_eq!(fixture.vault(vault_id).collateral_balance, 0);
        }

        let position = fixture.position(vault_id, &bob.pubkey()).unwrap();
        assert_eq!(position.total_deposited, position.total_withdrawn);
    }

    #[test]
    fn test_collateral_is_conserved() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture.deposit(&bob, vault_id, 2_500).unwrap();
        fixture.withdraw(&alice, vault_id, 400).unwrap();
        fixture.withdraw(&bob, vault_id, 1_000).unwrap();
        fixture.deposit(&alice, vault_id, 10).unwrap();
        fixture.withdraw(&alice, vault_id, 610).unwrap();

        let deposited = DEPOSIT_AMOUNT + 2_500 + 10;
        let withdrawn = 400 + 1_000 + 610;

        let vault = fixture.vault(vault_id);
        assert_eq!(vault.collateral_balance, deposited - withdrawn);
        assert_eq!(fixture.vault_holdings(vault_id), deposited - withdrawn);
        assert_eq!(fixture.share_supply(vault_id), deposited - withdrawn);

        let alice_position = fixture.position(vault_id, &alice.pubkey()).unwrap();
        assert_eq!(alice_position.total_deposited, DEPOSIT_AMOUNT + 10);
        assert_eq!(alice_position.total_withdrawn, 1_010);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 0);
    }

    #[test]
    fn test_withdraw_max_redeems_all_shares() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();

        fixture.withdraw(&alice, vault_id, u64::MAX).unwrap();

        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 0);
        assert_eq!(fixture.collateral_balance_of(&alice.pubkey()), INITIAL_COLLATERAL);
        assert_eq!(fixture.vault(vault_id).collateral_balance, 0);
    }

    #[test]
    fn test_withdraw_more_than_shares_reverts() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();

        fixture.expect_revert_with("VAULT_INSUFFICIENT_SHARES", |f| {
            f.withdraw(&alice, vault_id, DEPOSIT_AMOUNT + 1)
        });

        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), DEPOSIT_AMOUNT);
        assert_eq!(fixture.vault(vault_id).collateral_balance, DEPOSIT_AMOUNT);
    }

    #[test]
    fn test_withdraw_other_users_collateral_reverts() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        // bob holds a few shares, alice's deposit is not his to take
        fixture.deposit(&bob, vault_id, 5).unwrap();

        fixture.expect_revert_with("VAULT_INSUFFICIENT_SHARES", |f| {
            f.withdraw(&bob, vault_id, 6)
        });

        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), DEPOSIT_AMOUNT);
    }

    #[test]
    fn test_withdraw_zero_reverts() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let alice = fixture.alice.insecure_clone();

        fixture.expect_revert_with("VAULT_INVALID_AMOUNT", |f| f.withdraw(&alice, vault_id, 0));
    }

    #[test]
    fn test_withdraw_while_frozen_reverts() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        fixture.freeze(&admin, vault_id).unwrap();

        fixture.expect_revert_with("VAULT_FROZEN", |f| {
            f.withdraw(&alice, vault_id, DEPOSIT_AMOUNT)
        });
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), DEPOSIT_AMOUNT);
    }

    #[test]
    fn test_closed_vault_locks_collateral() {
        let (mut fixture, vault_id) = setup_with_deposit();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        fixture.close(&admin, vault_id).unwrap();

        fixture.expect_revert_with("VAULT_CLOSED", |f| {
            f.withdraw(&alice, vault_id, DEPOSIT_AMOUNT)
        });

        let vault = fixture.vault(vault_id);
        assert_eq!(vault.status, VaultStatus::Closed);
        assert_eq!(vault.collateral_balance, DEPOSIT_AMOUNT);
        assert_eq!(fixture.vault_holdings(vault_id), DEPOSIT_AMOUNT);
    }

    /// Deposit 1000, withdraw 1000: vault back to zero, withdrawer +1000
    #[test]
    fn test_deposit_then_withdraw_scenario() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        let vault_id = fixture.create_vault(&admin).unwrap();
        assert_eq!(vault_id, 1);

        fixture.deposit(&alice, vault_id, 1_000).unwrap();
        assert_eq!(fixture.vault(vault_id).collateral_balance, 1_000);
        assert_eq!(fixture.shares_of(vault_id, &alice.pubkey()), 1_000);

        let before = fixture.collateral_balance_of(&alice.pubkey());
        fixture.withdraw(&alice, vault_id, 1_000).unwrap();

        assert_eq!(fixture.vault(vault_id).collateral_balance, 0);
        assert_eq!(fixture.collateral_balance_of(&alice.pubkey()), before + 1_000);
    }
}
