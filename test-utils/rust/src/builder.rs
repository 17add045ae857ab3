use std::path::{Path, PathBuf};

use crate::{core::vm::Vm, errors::Result};
use solana_sdk::pubkey::Pubkey;

/// Builder for the test environment
#[derive(Debug, Clone, Default)]
pub struct VmBuilder {
    programs: Vec<ProgramArtifact>,
}

impl VmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy a program artifact before running tests.
    pub fn with_program(mut self, artifact: ProgramArtifact) -> Self {
        self.programs.push(artifact);
        self
    }

    pub fn build(self) -> Result<Vm> {
        let mut vm = Vm::new();

        for artifact in &self.programs {
            let path = artifact.so_path.to_string_lossy().to_string();
            vm.add_program_from_file(&artifact.program_id, &path)?;
        }

        Ok(vm)
    }
}

/// Metadata describing a compiled BPF program artifact.
#[derive(Debug, Clone)]
pub struct ProgramArtifact {
    program_id: Pubkey,
    so_path: PathBuf,
}

impl ProgramArtifact {
    pub fn new(program_id: Pubkey, so_path: impl Into<PathBuf>) -> Self {
        Self {
            program_id,
            so_path: so_path.into(),
        }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn so_path(&self) -> &Path {
        &self.so_path
    }
}
