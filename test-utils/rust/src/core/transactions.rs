//! Legacy transaction assembly and execution against LiteSVM

use crate::{
    core::vm::Vm,
    errors::{Result, VmError},
    internal::conversions::{to_lite_instruction, to_lite_pubkey},
};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use solana_keypair::Keypair as LiteKeypair;
use solana_message::{Message, VersionedMessage};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use solana_transaction::versioned::VersionedTransaction;

pub struct TransactionBuilder<'vm> {
    vm: &'vm mut Vm,
    instructions: Vec<Instruction>,
    payer: Option<Pubkey>,
    signers: Vec<LiteKeypair>,
}

impl<'vm> TransactionBuilder<'vm> {
    pub fn new(vm: &'vm mut Vm) -> Self {
        Self {
            vm,
            instructions: vec![],
            payer: None,
            signers: vec![],
        }
    }

    pub fn instructions(mut self, ixs: &[Instruction]) -> Self {
        self.instructions.extend_from_slice(ixs);
        self
    }

    /// The first signer pays fees. Repeated signers are kept once.
    pub fn signers(mut self, keypairs: &[&Keypair]) -> Result<Self> {
        for keypair in keypairs {
            if self
                .signers
                .iter()
                .any(|s| s.to_bytes() == keypair.to_bytes())
            {
                continue;
            }
            let lite = LiteKeypair::try_from(&keypair.to_bytes()[..])
                .map_err(|e| VmError::TransactionFailed(format!("Invalid signer: {}", e)))?;
            self.payer.get_or_insert(keypair.pubkey());
            self.signers.push(lite);
        }
        Ok(self)
    }

    pub fn execute(self) -> Result<TransactionMetadata> {
        let Self {
            vm,
            instructions,
            payer,
            signers,
        } = self;

        let payer = to_lite_pubkey(&payer.ok_or(VmError::NoSigners)?);

        // fresh blockhash so repeated identical instructions are not deduplicated
        vm.svm.expire_blockhash();
        let blockhash = vm.svm.latest_blockhash();

        let lite_instructions: Vec<_> = instructions.into_iter().map(to_lite_instruction).collect();
        let message = VersionedMessage::Legacy(Message::new_with_blockhash(
            &lite_instructions,
            Some(&payer),
            &blockhash,
        ));

        let signer_refs: Vec<&LiteKeypair> = signers.iter().collect();
        let tx = VersionedTransaction::try_new(message, &signer_refs)
            .map_err(|e| VmError::TransactionFailed(format!("Failed to create tx: {}", e)))?;

        match vm.svm.send_transaction(tx) {
            Ok(metadata) => {
                vm.record_success(metadata.logs.clone());
                Ok(metadata)
            }
            Err(e) => {
                vm.record_failure(e.meta.logs.clone());
                Err(VmError::TransactionFailed(format_failed_transaction(&e)))
            }
        }
    }
}

fn format_failed_transaction(err: &FailedTransactionMetadata) -> String {
    if err.meta.logs.is_empty() {
        format!("{:?}", err.err)
    } else {
        format!("{:?}\nProgram logs:\n{}", err.err, err.meta.logs.join("\n"))
    }
}

impl Vm {
    /// Execute `ix` signed and paid by the address passed to `prank()`
    pub fn execute_as_prank(&mut self, ix: Instruction) -> Result<TransactionMetadata> {
        let signer = self.take_prank_keypair().ok_or_else(|| {
            VmError::Custom("No prank address set or keypair not registered".to_string())
        })?;
        TransactionBuilder::new(self)
            .instructions(&[ix])
            .signers(&[&signer])?
            .execute()
    }
}
