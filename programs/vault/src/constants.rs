/// @dev first id handed out by the registry
pub const FIRST_VAULT_ID: u64 = 1;

/// @dev precision of the share exchange rate
pub const SHARE_RATE_PRECISION: u128 = 1_000_000_000_000; // 1e12

/// @dev shares minted per smallest collateral unit, scaled by SHARE_RATE_PRECISION.
/// One collateral unit always maps to one share unit, independent of decimals.
pub const SHARE_EXCHANGE_RATE: u128 = SHARE_RATE_PRECISION;

/// @dev max_deposit value meaning the vault has no deposit cap
pub const UNCAPPED_DEPOSIT: u64 = 0;
