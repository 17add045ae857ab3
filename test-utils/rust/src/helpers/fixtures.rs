use crate::errors::{Result, VmError};

/// Shared lookup of compiled program artifacts.
pub struct BaseFixture;

impl BaseFixture {
    // Helper function to find program .so file
    pub fn find_program_path(program_name: &str) -> Option<String> {
        ["../", "", "../../", "./"]
            .iter()
            .map(|prefix| format!("{}target/deploy/{}", prefix, program_name))
            .find(|path| std::path::Path::new(path).exists())
    }

    /// Path of a built program, `ProgramNotFound` when it has not been built
    pub fn require_program_path(program_name: &str) -> Result<String> {
        Self::find_program_path(program_name)
            .ok_or_else(|| VmError::ProgramNotFound(program_name.to_string()))
    }
}
