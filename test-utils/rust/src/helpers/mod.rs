//! Testing helpers and utilities

pub mod assertions;
pub mod events;
pub mod fixtures;
pub mod tokens;

pub use assertions::{ExpectRevertExt, ExpectRevertResultExt, RevertInfo, VmAccess};
pub use events::decode_events;
pub use fixtures::BaseFixture;
pub use tokens::{MintInfo, TokenHelper};
