pub mod builder;
pub mod core;
pub mod errors;
pub mod helpers;

mod internal;

pub mod prelude {
    pub use crate::builder::{ProgramArtifact, VmBuilder};
    pub use crate::core::{AccountManager, StateManager, TransactionBuilder, Vm};
    pub use crate::errors::*;
    pub use crate::helpers::{
        BaseFixture, ExpectRevertExt, ExpectRevertResultExt, RevertInfo, TokenHelper, VmAccess,
    };

    pub use solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_program,
    };

    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    /// Time constants for convenience
    pub mod time {
        pub const SECOND: i64 = 1;
        pub const MINUTE: i64 = 60;
        pub const HOUR: i64 = 3600;
        pub const DAY: i64 = 86400;
    }
}

pub use core::{AccountManager, StateManager, TransactionBuilder, Vm};
pub use errors::{Result, VmError};
pub use helpers::BaseFixture;
