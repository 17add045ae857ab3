//! LiteSVM wrapper owning deployed programs, known signers and the last transaction's logs

use std::collections::HashMap;

use litesvm::LiteSVM;
use solana_clock::Clock;
use solana_compute_budget::compute_budget::ComputeBudget;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    errors::{Result, VmError},
    internal::conversions::to_lite_pubkey,
};

pub struct Vm {
    pub svm: LiteSVM,

    /// Keypairs handed out by `make_account`, keyed by address
    keypairs: HashMap<Pubkey, [u8; 64]>,

    /// Signer impersonated by the next `execute_as_prank`
    prank_address: Option<Pubkey>,

    /// Logs of the last successful transaction
    last_logs: Option<Vec<String>>,

    /// Logs of the last failed transaction
    last_error_logs: Option<Vec<String>>,
}

impl Vm {
    pub fn new() -> Self {
        let mut compute_budget = ComputeBudget::new_with_defaults(false);
        compute_budget.compute_unit_limit = 1_400_000;
        let mut svm = LiteSVM::new()
            .with_compute_budget(compute_budget)
            .with_transaction_history(50);

        let now = chrono::Utc::now().timestamp();
        svm.set_sysvar::<Clock>(&Clock {
            slot: 1000,
            epoch_start_timestamp: now,
            epoch: 100,
            leader_schedule_epoch: 101,
            unix_timestamp: now,
        });

        Self {
            svm,
            keypairs: HashMap::new(),
            prank_address: None,
            last_logs: None,
            last_error_logs: None,
        }
    }

    pub fn register_keypair(&mut self, keypair: &Keypair) {
        self.keypairs.insert(keypair.pubkey(), keypair.to_bytes());
    }

    pub fn get_keypair(&self, address: &Pubkey) -> Option<Keypair> {
        self.keypairs
            .get(address)
            .and_then(|bytes| Keypair::try_from(bytes.as_slice()).ok())
    }

    /// Sign the next `execute_as_prank` as `address`, which must be a registered keypair.
    pub fn prank(&mut self, address: Pubkey) {
        self.prank_address = Some(address);
    }

    pub(crate) fn take_prank_keypair(&mut self) -> Option<Keypair> {
        self.prank_address
            .take()
            .and_then(|address| self.get_keypair(&address))
    }

    pub fn add_program_from_file(&mut self, program_id: &Pubkey, file_path: &str) -> Result<()> {
        let bytecode = std::fs::read(file_path)?;
        self.svm
            .add_program(to_lite_pubkey(program_id), &bytecode)
            .map_err(|e| VmError::DeploymentFailed(format!("{:?}", e)))?;
        tracing::debug!(%program_id, file_path, "program deployed");
        Ok(())
    }

    pub fn rent(&self) -> solana_sdk::rent::Rent {
        solana_sdk::rent::Rent::default()
    }

    pub fn last_tx_logs(&self) -> Option<&Vec<String>> {
        self.last_logs.as_ref()
    }

    pub fn last_error_logs(&self) -> Option<&Vec<String>> {
        self.last_error_logs.as_ref()
    }

    pub(crate) fn record_success(&mut self, logs: Vec<String>) {
        self.last_logs = Some(logs);
        self.last_error_logs = None;
    }

    pub(crate) fn record_failure(&mut self, logs: Vec<String>) {
        self.last_error_logs = (!logs.is_empty()).then_some(logs);
    }

    pub(crate) fn clear_last_error_logs(&mut self) {
        self.last_error_logs = None;
    }

    /// True when `expected_message` appears in the error or in the failed transaction's logs
    pub fn revert_matches(&self, expected_message: &str, err: &VmError) -> bool {
        err.to_string().contains(expected_message)
            || self
                .last_error_logs
                .iter()
                .flatten()
                .any(|log| log.contains(expected_message))
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
