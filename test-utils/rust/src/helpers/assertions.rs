use crate::helpers::tokens::TokenHelper;
use crate::{
    core::{accounts::AccountManager, vm::Vm},
    errors::VmError,
};
use solana_sdk::pubkey::Pubkey;

/// A failed call together with the logs of the transaction that reverted
#[derive(Debug, Clone)]
pub struct RevertInfo {
    pub error: String,
    pub logs: Vec<String>,
}

impl RevertInfo {
    pub fn contains(&self, message: &str) -> bool {
        self.error.contains(message) || self.logs.iter().any(|log| log.contains(message))
    }
}

/// Panics unless `result` failed, and, when `expected` is given, failed with that message.
fn check_revert<T, E: Into<VmError>>(
    vm: &Vm,
    result: std::result::Result<T, E>,
    expected: Option<&str>,
) -> RevertInfo {
    let err: VmError = match result {
        Ok(_) => match expected {
            Some(message) => panic!(
                "Expected revert containing {:?}, but the call succeeded",
                message
            ),
            None => panic!("Expected action to fail, but it succeeded"),
        },
        Err(err) => err.into(),
    };

    let logs = vm.last_error_logs().cloned().unwrap_or_default();

    if let Some(message) = expected {
        if !vm.revert_matches(message, &err) {
            panic!(
                "Expected revert containing {:?}, but got error: {}\nLogs:\n{}",
                message,
                err,
                logs.join("\n")
            );
        }
    }

    RevertInfo {
        error: err.to_string(),
        logs,
    }
}

/// Types wrapping a [`Vm`], such as program fixtures
pub trait VmAccess {
    fn vm_mut(&mut self) -> &mut Vm;
}

impl VmAccess for Vm {
    fn vm_mut(&mut self) -> &mut Vm {
        self
    }
}

pub trait ExpectRevertExt: VmAccess {
    /// Run `action` and assert it reverts with `expected_message`.
    ///
    /// ```ignore
    /// fixture.expect_revert_with("VAULT_FROZEN", |f| f.deposit(&alice, vault_id, 1_000));
    /// ```
    fn expect_revert_with<F, T, E>(&mut self, expected_message: &str, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.vm_mut().clear_last_error_logs();
        let result = action(self);
        check_revert(self.vm_mut(), result, Some(expected_message))
    }

    /// Run `action` and assert it fails, whatever the reason.
    fn expect_fail<F, T, E>(&mut self, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.vm_mut().clear_last_error_logs();
        let result = action(self);
        check_revert(self.vm_mut(), result, None)
    }
}

impl<T> ExpectRevertExt for T where T: VmAccess {}

/// Same check for a call already made, e.g. `vm.execute_as_prank(ix).expect_revert_containing(vm, ..)`
pub trait ExpectRevertResultExt {
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo;
}

impl<T, E: Into<VmError>> ExpectRevertResultExt for std::result::Result<T, E> {
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo {
        check_revert(vm, self, Some(expected_message))
    }
}

impl Vm {
    pub fn assert_account_owner(&self, pubkey: &Pubkey, expected_owner: &Pubkey) {
        let owner = AccountManager::get_account(self, pubkey)
            .unwrap_or_else(|| panic!("Account {} not found", pubkey))
            .owner;
        assert_eq!(owner, *expected_owner, "owner of {}", pubkey);
    }

    pub fn assert_token_balance_changed(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
        before: u64,
        expected_change: i64,
    ) {
        let after = self.token_balance(owner, mint);
        assert_eq!(
            Some(after),
            before.checked_add_signed(expected_change),
            "token balance of {} moved from {} to {}, expected a change of {}",
            owner,
            before,
            after,
            expected_change
        );
    }

    pub fn assert_logs_contain(&self, expected: &str) {
        let logs = self
            .last_tx_logs()
            .unwrap_or_else(|| panic!("No transaction logs found"));
        assert!(
            logs.iter().any(|log| log.contains(expected)),
            "Expected logs to contain '{}'.\nLogs: {:?}",
            expected,
            logs
        );
    }
}
