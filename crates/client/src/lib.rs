pub mod client;
pub mod config;
pub mod connection;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use client::VaultClient;
pub use config::ClientConfig;
pub use connection::{LedgerConnection, RpcConnection};
pub use errors::{ClientError, ClientResult};
pub use resolver::{resolve_or_create, MAX_RESOLVE_ATTEMPTS};
